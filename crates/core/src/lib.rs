//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the board model, the match rules and the swap protocol.
//! It has **zero dependencies** on terminals, input devices, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces the same board
//! - **Testable**: Every rule is reachable through plain method calls
//! - **Portable**: Can drive a terminal front end, a GUI, or a headless bot
//!
//! # Module Structure
//!
//! - [`grid`]: the tile arena, coordinate <-> tile mapping and world-space layout
//! - [`tile`]: a single tile's identity, kind and flags
//! - [`matcher`]: run detection from a tile outward in four directions
//! - [`swap`]: the selection / swap / swap-back state machine
//! - [`tween`]: fixed-duration position interpolation and the completion latch
//! - [`consumer`]: what to do with the tiles of an accepted swap
//! - [`rng`]: seeded random source used for board generation
//! - [`snapshot`]: render-ready copy of the board
//!
//! # Game Rules
//!
//! - Two tiles can be swapped only if they are 4-neighbors
//! - A swap stands only if it leaves at least one run of three or more
//!   same-kind tiles in a row or column somewhere on the board
//! - A swap that produces no run is animated back automatically
//! - A freshly generated board never contains a run (with 3+ kinds)
//!
//! # Example
//!
//! ```
//! use tui_match3_core::{Grid, SimpleRng, SwapController, SwapResolution};
//! use tui_match3_core::types::{BoardConfig, Coord};
//!
//! let config = BoardConfig::default();
//! let grid = Grid::initialize(&config, &mut SimpleRng::new(12345)).unwrap();
//! assert!(grid.all_matches().is_empty());
//!
//! let mut board = SwapController::new(grid, config.swap_duration_ms);
//! board.select(Coord::new(2, 2)).unwrap();
//! board.select(Coord::new(2, 3)).unwrap();
//! assert!(board.is_animating());
//!
//! // Drive the animation to completion.
//! let mut resolution = None;
//! while resolution.is_none() {
//!     resolution = board.tick(16).unwrap();
//! }
//! assert!(!board.is_animating());
//! assert!(matches!(
//!     resolution,
//!     Some(SwapResolution::Accepted { .. } | SwapResolution::Reverted { .. })
//! ));
//! ```
//!
//! # Timing
//!
//! Animations advance only through [`SwapController::tick`](swap::SwapController::tick);
//! call it every frame with the elapsed milliseconds.

pub mod consumer;
pub mod error;
pub mod grid;
pub mod matcher;
pub mod rng;
pub mod snapshot;
pub mod swap;
pub mod tile;
pub mod tween;

pub use tui_match3_types as types;

// Re-export commonly used types for convenience
pub use consumer::{ClearMatches, MatchConsumer};
pub use error::{BoardError, Result};
pub use grid::{Grid, TileMove};
pub use matcher::{MatchDetector, MatchSet};
pub use rng::{RandomSource, SimpleRng};
pub use snapshot::{BoardSnapshot, TileSnapshot};
pub use swap::{
    IgnoreReason, SelectOutcome, SwapController, SwapPair, SwapPhase, SwapResolution, SwapState,
};
pub use tile::{Tile, TileId};
pub use tween::{Latch, Tween, TweenStep};
