//! Terminal input module (board-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::BoardAction`] and keeps the
//! keyboard cursor used to pick tiles without a mouse. Mouse clicks are
//! resolved to coordinates by the view that drew the board.

pub mod cursor;
pub mod map;

pub use tui_match3_types as types;

pub use cursor::Cursor;
pub use map::{handle_key_event, should_quit};
