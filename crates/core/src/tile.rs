//! Tile module - a single grid cell's identity and flags
//!
//! Tiles live in an arena owned by the [`Grid`](crate::grid::Grid); a
//! [`TileId`] is the tile's identity for the whole lifetime of the board. The
//! coordinate is written only by the grid (placement and swaps) and the
//! selection flag only by the swap controller.

use std::fmt;

use crate::types::{Coord, TileKind};

/// Stable handle to a tile on one board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u32);

impl TileId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    id: TileId,
    kind: TileKind,
    coord: Coord,
    destroyed: bool,
    selected: bool,
}

impl Tile {
    pub(crate) fn new(id: TileId, kind: TileKind, coord: Coord) -> Self {
        Self {
            id,
            kind,
            coord,
            destroyed: false,
            selected: false,
        }
    }

    pub fn id(&self) -> TileId {
        self.id
    }

    pub fn kind(&self) -> TileKind {
        self.kind
    }

    /// The coordinate this tile currently occupies
    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Whether the tile can take part in selection (it still has a visual)
    pub fn is_interactive(&self) -> bool {
        !self.destroyed
    }

    /// True when both tiles are live and share a kind
    pub fn matches_kind(&self, other: &Tile) -> bool {
        !self.destroyed && !other.destroyed && self.kind == other.kind
    }

    pub(crate) fn set_coord(&mut self, coord: Coord) {
        self.coord = coord;
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub(crate) fn destroy(&mut self) {
        self.destroyed = true;
        self.selected = false;
    }
}
