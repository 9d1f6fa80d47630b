//! Terminal drawing: a full frame on demand, per-cell updates between
//! turns, and the status line underneath the maze.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use labyrinth_core::{FieldKind, GameSession, ItemKind, Pos};

/// Rows reserved above the maze for the status line.
const GRID_TOP: u16 = 2;
/// Chebyshev radius the avatar can see while the fog holds.
const FOG_RADIUS: i32 = 2;

pub struct Renderer {
    out: Stdout,
    last_avatar: Option<Pos>,
    last_minotaur: Option<Pos>,
    fog_was_active: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self { out: io::stdout(), last_avatar: None, last_minotaur: None, fog_was_active: false }
    }

    /// Redraw everything: status line, maze, message row.
    pub fn draw_full(&mut self, session: &GameSession) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.draw_status(session)?;

        let fog = fog_active(session);
        for y in 0..session.maze().height() as i32 {
            for x in 0..session.maze().width() as i32 {
                self.draw_cell(session, Pos { y, x }, fog)?;
            }
        }

        self.remember(session);
        self.out.flush()
    }

    /// Draw only what the last turn touched. Falls back to a full frame
    /// whenever the fog is (or just stopped) clouding the view, since the
    /// visible window moves with the avatar.
    pub fn draw_turn(&mut self, session: &GameSession, changed: &[Pos]) -> io::Result<()> {
        let fog = fog_active(session);
        if fog || self.fog_was_active {
            return self.draw_full(session);
        }

        self.draw_status(session)?;
        for &pos in changed {
            self.draw_cell(session, pos, fog)?;
        }
        if let Some(pos) = self.last_avatar {
            self.draw_cell(session, pos, fog)?;
        }
        if let Some(pos) = self.last_minotaur {
            self.draw_cell(session, pos, fog)?;
        }
        self.draw_cell(session, session.avatar(), fog)?;
        if let Some(pos) = session.minotaur().pos() {
            self.draw_cell(session, pos, fog)?;
        }

        self.remember(session);
        self.out.flush()
    }

    /// Print a line in the message row under the maze.
    pub fn draw_message(&mut self, session: &GameSession, line: &str) -> io::Result<()> {
        let row = GRID_TOP + session.maze().height() as u16 + 1;
        queue!(
            self.out,
            MoveTo(0, row),
            Clear(ClearType::CurrentLine),
            Print(line)
        )?;
        self.out.flush()
    }

    fn draw_status(&mut self, session: &GameSession) -> io::Result<()> {
        queue!(
            self.out,
            MoveTo(0, 0),
            Clear(ClearType::CurrentLine),
            Print(status_line(session))
        )
    }

    fn draw_cell(&mut self, session: &GameSession, pos: Pos, fog: bool) -> io::Result<()> {
        if !session.maze().in_bounds(pos) {
            return Ok(());
        }
        let (symbol, color) = cell_face(session, pos, fog);
        queue!(
            self.out,
            MoveTo(pos.x as u16, GRID_TOP + pos.y as u16),
            SetForegroundColor(color),
            Print(symbol),
            ResetColor
        )
    }

    fn remember(&mut self, session: &GameSession) {
        self.last_avatar = Some(session.avatar());
        self.last_minotaur = session.minotaur().pos();
        self.fog_was_active = fog_active(session);
    }
}

fn fog_active(session: &GameSession) -> bool {
    session.effects().is_active(ItemKind::FogOfWar)
}

/// What to print at `pos`: overlays first, then the field symbol. Under
/// fog, anything outside the avatar's sight reads as a blank.
fn cell_face(session: &GameSession, pos: Pos, fog: bool) -> (char, Color) {
    if fog && !in_sight(session.avatar(), pos) {
        return (' ', Color::Reset);
    }
    if pos == session.avatar() {
        return ('R', Color::Cyan);
    }
    if session.minotaur().pos() == Some(pos) {
        return ('M', Color::Red);
    }
    let field = session.maze().field_at(pos);
    let color = match field {
        FieldKind::Wall => Color::DarkGrey,
        FieldKind::Entrance | FieldKind::Exit => Color::Green,
        FieldKind::Item(_) => Color::Yellow,
        FieldKind::Passage => Color::Reset,
    };
    (field.symbol(), color)
}

fn in_sight(avatar: Pos, pos: Pos) -> bool {
    (avatar.x - pos.x).abs() <= FOG_RADIUS && (avatar.y - pos.y).abs() <= FOG_RADIUS
}

fn status_line(session: &GameSession) -> String {
    let effects = session.effects();
    format!(
        "Moves: {:<5} Sword: {}  Shield: {}  Hammer: {}  Fog: {}",
        session.moves_made(),
        effects.counter(ItemKind::Sword),
        effects.counter(ItemKind::Shield),
        effects.counter(ItemKind::Hammer),
        effects.counter(ItemKind::FogOfWar),
    )
}
