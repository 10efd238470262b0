//! Terminal board renderer.
//!
//! A small, game-oriented rendering layer: the board snapshot is drawn into a
//! plain framebuffer (pure, unit-testable), which is then flushed to the
//! terminal with crossterm. No widget/layout library is involved.
//!
//! - [`fb`]: styled character framebuffer
//! - [`palette`]: how a tile kind and its flags look
//! - [`board_view`]: snapshot -> framebuffer, and mouse hit-testing
//! - [`renderer`]: framebuffer -> terminal

pub mod board_view;
pub mod fb;
pub mod palette;
pub mod renderer;

pub use tui_match3_core as core;
pub use tui_match3_types as types;

pub use board_view::{BoardView, Hud, Viewport};
pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use palette::{tile_glyph, tile_style};
pub use renderer::TerminalRenderer;
