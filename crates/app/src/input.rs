//! Keyboard handling: one blocking read mapped to a player intent.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use labyrinth_core::{Direction, PlayerIntent};

/// Block until the player presses a key the game understands. Everything
/// else is swallowed, like the original console loop did.
pub fn read_intent() -> io::Result<PlayerIntent> {
    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(intent) = map_key(key) {
                    return Ok(intent);
                }
            }
            Event::Resize(_, _) => return Ok(PlayerIntent::Redraw),
            _ => {}
        }
    }
}

fn map_key(key: KeyEvent) -> Option<PlayerIntent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(PlayerIntent::Quit);
    }

    match key.code {
        KeyCode::Char('w' | 'W') | KeyCode::Up => Some(PlayerIntent::Move(Direction::North)),
        KeyCode::Char('s' | 'S') | KeyCode::Down => Some(PlayerIntent::Move(Direction::South)),
        KeyCode::Char('a' | 'A') | KeyCode::Left => Some(PlayerIntent::Move(Direction::West)),
        KeyCode::Char('d' | 'D') | KeyCode::Right => Some(PlayerIntent::Move(Direction::East)),
        KeyCode::Char('r' | 'R') => Some(PlayerIntent::Redraw),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(PlayerIntent::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn wasd_maps_to_the_compass() {
        assert_eq!(map_key(press(KeyCode::Char('w'))), Some(PlayerIntent::Move(Direction::North)));
        assert_eq!(map_key(press(KeyCode::Char('a'))), Some(PlayerIntent::Move(Direction::West)));
        assert_eq!(map_key(press(KeyCode::Char('s'))), Some(PlayerIntent::Move(Direction::South)));
        assert_eq!(map_key(press(KeyCode::Char('d'))), Some(PlayerIntent::Move(Direction::East)));
    }

    #[test]
    fn arrows_mirror_wasd() {
        assert_eq!(map_key(press(KeyCode::Up)), Some(PlayerIntent::Move(Direction::North)));
        assert_eq!(map_key(press(KeyCode::Down)), Some(PlayerIntent::Move(Direction::South)));
        assert_eq!(map_key(press(KeyCode::Left)), Some(PlayerIntent::Move(Direction::West)));
        assert_eq!(map_key(press(KeyCode::Right)), Some(PlayerIntent::Move(Direction::East)));
    }

    #[test]
    fn uppercase_input_works_too() {
        assert_eq!(map_key(press(KeyCode::Char('W'))), Some(PlayerIntent::Move(Direction::North)));
        assert_eq!(map_key(press(KeyCode::Char('Q'))), Some(PlayerIntent::Quit));
    }

    #[test]
    fn quit_escape_and_ctrl_c_all_leave() {
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(PlayerIntent::Quit));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(PlayerIntent::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(PlayerIntent::Quit)
        );
    }

    #[test]
    fn unknown_keys_are_swallowed() {
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
        assert_eq!(map_key(press(KeyCode::Enter)), None);
        assert_eq!(map_key(press(KeyCode::Tab)), None);
    }
}
