//! The playing session: one maze, one avatar, one minotaur, and the
//! turn-resolution rules that tie them together.

pub mod effects;
mod minotaur;


use std::time::{Duration, Instant};

use crate::maze::Maze;
use crate::mazegen::{MazeGenerator, minotaur_spawn};
use crate::report::GameReport;
use crate::rng::GameRng;
use crate::types::{
    Direction, FieldKind, GenerationWarning, ItemKind, MazeError, MinotaurState, Outcome,
    PlayerIntent, Pos, TurnEvent,
};

use effects::EffectState;
use minotaur::MinotaurAction;

/// Dimensions and item count, validated upstream: width and height above
/// 15, item count above 3 and at most a third of the cell count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub width: usize,
    pub height: usize,
    pub item_count: usize,
}

#[derive(Clone, Debug)]
pub struct GenerationSummary {
    pub build_time: Duration,
    pub items_placed: usize,
    pub warnings: Vec<GenerationWarning>,
}

/// What one intent did to the world, for rendering and messaging.
#[derive(Clone, Debug, Default)]
pub struct TurnReport {
    /// True only when a directional intent actually moved the avatar.
    pub accepted: bool,
    pub redraw_requested: bool,
    pub events: Vec<TurnEvent>,
    /// Cells whose field changed this turn (pickups, smashed walls,
    /// crushed items).
    pub cell_changes: Vec<Pos>,
    pub outcome: Option<Outcome>,
}

pub struct GameSession {
    maze: Maze,
    avatar: Pos,
    minotaur: MinotaurState,
    effects: EffectState,
    moves_made: u32,
    started_at: Instant,
    play_time: Option<Duration>,
    rng: GameRng,
    outcome: Option<Outcome>,
    generation: GenerationSummary,
}

impl GameSession {
    pub fn new(config: SessionConfig, mut rng: GameRng) -> Result<Self, MazeError> {
        let generated =
            MazeGenerator::new(config.width, config.height).generate(&mut rng, config.item_count)?;
        let avatar = generated.avatar_start();

        let mut warnings = generated.warnings.clone();
        let minotaur = match minotaur_spawn(&generated.maze, avatar, &mut rng) {
            Some(pos) => MinotaurState::Roaming(pos),
            None => {
                warnings.push(GenerationWarning::NoRoomForMinotaur);
                MinotaurState::Absent
            }
        };

        Ok(Self {
            maze: generated.maze,
            avatar,
            minotaur,
            effects: EffectState::new(),
            moves_made: 0,
            started_at: Instant::now(),
            play_time: None,
            rng,
            outcome: None,
            generation: GenerationSummary {
                build_time: generated.build_time,
                items_placed: generated.items_placed,
                warnings,
            },
        })
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn avatar(&self) -> Pos {
        self.avatar
    }

    pub fn minotaur(&self) -> MinotaurState {
        self.minotaur
    }

    pub fn effects(&self) -> &EffectState {
        &self.effects
    }

    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn generation(&self) -> &GenerationSummary {
        &self.generation
    }

    /// Play time so far, frozen at the moment the session finished.
    pub fn elapsed(&self) -> Duration {
        self.play_time.unwrap_or_else(|| self.started_at.elapsed())
    }

    /// Resolve one intent. On a finished session this is a no-op that
    /// reports the terminal outcome again.
    pub fn apply(&mut self, intent: PlayerIntent) -> TurnReport {
        let mut report = TurnReport { outcome: self.outcome, ..TurnReport::default() };
        if self.outcome.is_some() {
            return report;
        }

        match intent {
            PlayerIntent::Redraw => report.redraw_requested = true,
            PlayerIntent::Quit => self.finish(Outcome::Forfeited, &mut report),
            PlayerIntent::Move(direction) => self.resolve_move(direction, &mut report),
        }

        report
    }

    fn resolve_move(&mut self, direction: Direction, report: &mut TurnReport) {
        let destination = self.avatar.step(direction);
        let target = self.maze.field_at(destination);

        // An active hammer makes in-bounds walls legal destinations; the
        // wall shatters on entry. Out-of-bounds stays impassable.
        let smashes_wall = target == FieldKind::Wall
            && self.maze.in_bounds(destination)
            && self.effects.is_active(ItemKind::Hammer);

        if !target.is_walkable() && !smashes_wall {
            report.events.push(TurnEvent::MoveBlocked(destination));
            return;
        }

        self.avatar = destination;
        self.moves_made += 1;
        report.accepted = true;

        if smashes_wall {
            self.maze.put(destination, FieldKind::Passage);
            report.cell_changes.push(destination);
            report.events.push(TurnEvent::WallSmashed(destination));
        }

        if let FieldKind::Item(kind) = target {
            self.effects.refresh(kind);
            self.maze.put(destination, FieldKind::Passage);
            report.cell_changes.push(destination);
            report.events.push(TurnEvent::ItemPickedUp(kind));
        }

        // Decay runs every accepted move, including the one that picked an
        // item up, so a fresh blessing reads 3 going into the next turn.
        self.effects.decay();

        if let MinotaurState::Roaming(pos) = self.minotaur {
            self.resolve_minotaur_turn(pos, report);
        }

        if self.maze.field_at(self.avatar) == FieldKind::Exit {
            let outcome = if self.minotaur == MinotaurState::Slain {
                Outcome::MinotaurSlain
            } else {
                Outcome::Victory
            };
            self.finish(outcome, report);
        } else if let MinotaurState::Roaming(pos) = self.minotaur
            && pos == self.avatar
        {
            self.finish(Outcome::CaughtByMinotaur, report);
        }
    }

    fn resolve_minotaur_turn(&mut self, from: Pos, report: &mut TurnReport) {
        let action =
            minotaur::take_turn(&self.maze, from, self.avatar, &self.effects, &mut self.rng);
        match action {
            MinotaurAction::Stay => {}
            MinotaurAction::Slain => {
                self.minotaur = MinotaurState::Slain;
                report.events.push(TurnEvent::MinotaurSlain);
            }
            MinotaurAction::Step(to) | MinotaurAction::Deflected(to) => {
                if matches!(action, MinotaurAction::Deflected(_)) {
                    report.events.push(TurnEvent::AttackDeflected { to });
                }
                self.minotaur = MinotaurState::Roaming(to);
                // The brute tramples whatever relic it lands on.
                if matches!(self.maze.field_at(to), FieldKind::Item(_)) {
                    self.maze.put(to, FieldKind::Passage);
                    report.cell_changes.push(to);
                    report.events.push(TurnEvent::ItemCrushed { pos: to });
                }
            }
        }
    }

    fn finish(&mut self, outcome: Outcome, report: &mut TurnReport) {
        self.outcome = Some(outcome);
        self.play_time = Some(self.started_at.elapsed());
        report.outcome = Some(outcome);
    }

    /// Symbol grid with the avatar (`R`) and a roaming minotaur (`M`)
    /// drawn over their cells.
    pub fn annotated_rows(&self) -> Vec<String> {
        let mut rows = self.maze.symbol_rows();
        if let Some(pos) = self.minotaur.pos() {
            overlay(&mut rows, pos, 'M');
        }
        overlay(&mut rows, self.avatar, 'R');
        rows
    }

    /// The structured result record handed to persistence, available
    /// exactly once the session has finished.
    pub fn final_report(&self) -> Option<GameReport> {
        let outcome = self.outcome?;
        Some(GameReport {
            outcome,
            avatar: self.avatar,
            minotaur: self.minotaur.pos(),
            minotaur_slain: self.minotaur == MinotaurState::Slain,
            moves_made: self.moves_made,
            duration_ms: self.elapsed().as_millis() as u64,
            duration_micros: self.elapsed().as_micros() as u64,
            grid_rows: self.annotated_rows(),
        })
    }
}

fn overlay(rows: &mut [String], pos: Pos, symbol: char) {
    if let Some(row) = rows.get_mut(pos.y as usize) {
        let x = pos.x as usize;
        if x < row.len() {
            row.replace_range(x..=x, &symbol.to_string());
        }
    }
}

#[cfg(test)]
impl GameSession {
    /// Build a session around a hand-crafted maze, skipping generation.
    pub(crate) fn from_parts(
        maze: Maze,
        avatar: Pos,
        minotaur: MinotaurState,
        effects: EffectState,
        seed: u64,
    ) -> Self {
        Self {
            maze,
            avatar,
            minotaur,
            effects,
            moves_made: 0,
            started_at: Instant::now(),
            play_time: None,
            rng: GameRng::seeded(seed),
            outcome: None,
            generation: GenerationSummary {
                build_time: Duration::ZERO,
                items_placed: 0,
                warnings: Vec::new(),
            },
        }
    }
}
