//! Key mapping from terminal events to board actions.

use crate::types::{BoardAction, Direction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to board actions.
pub fn handle_key_event(key: KeyEvent) -> Option<BoardAction> {
    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => {
            Some(BoardAction::Cursor(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => {
            Some(BoardAction::Cursor(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => {
            Some(BoardAction::Cursor(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => {
            Some(BoardAction::Cursor(Direction::Down))
        }

        // Selection
        KeyCode::Char(' ') | KeyCode::Enter => Some(BoardAction::Select),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(BoardAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
