//! Board errors.
//!
//! Only programming errors end up here: an illegal swap or a non-adjacent
//! selection is a state transition, never an error.

use thiserror::Error;

use crate::tile::TileId;

pub type Result<T, E = BoardError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} board")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("tile {tile} is not on this board")]
    NotFound { tile: TileId },
    #[error("invalid board configuration: {reason}")]
    InvalidConfig { reason: &'static str },
}
