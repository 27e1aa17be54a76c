//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Slides
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(GameAction::Move(Direction::Left)),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(GameAction::Move(Direction::Right)),
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(GameAction::Move(Direction::Up)),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(GameAction::Move(Direction::Down)),

        // New game
        KeyCode::Char('r')
        | KeyCode::Char('R')
        | KeyCode::Char('n')
        | KeyCode::Char('N') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn action(code: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(action(KeyCode::Left), Some(GameAction::Move(Direction::Left)));
        assert_eq!(action(KeyCode::Right), Some(GameAction::Move(Direction::Right)));
        assert_eq!(action(KeyCode::Up), Some(GameAction::Move(Direction::Up)));
        assert_eq!(action(KeyCode::Down), Some(GameAction::Move(Direction::Down)));
    }

    #[test]
    fn test_vim_and_wasd_keys() {
        assert_eq!(action(KeyCode::Char('h')), Some(GameAction::Move(Direction::Left)));
        assert_eq!(action(KeyCode::Char('L')), Some(GameAction::Move(Direction::Right)));
        assert_eq!(action(KeyCode::Char('k')), Some(GameAction::Move(Direction::Up)));
        assert_eq!(action(KeyCode::Char('J')), Some(GameAction::Move(Direction::Down)));

        assert_eq!(action(KeyCode::Char('a')), Some(GameAction::Move(Direction::Left)));
        assert_eq!(action(KeyCode::Char('D')), Some(GameAction::Move(Direction::Right)));
        assert_eq!(action(KeyCode::Char('w')), Some(GameAction::Move(Direction::Up)));
        assert_eq!(action(KeyCode::Char('s')), Some(GameAction::Move(Direction::Down)));
    }

    #[test]
    fn test_restart_keys() {
        assert_eq!(action(KeyCode::Char('r')), Some(GameAction::Restart));
        assert_eq!(action(KeyCode::Char('N')), Some(GameAction::Restart));
        assert_eq!(action(KeyCode::Char('x')), None);
        assert_eq!(action(KeyCode::Enter), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
