use crate::tile::TileId;
use crate::types::{Coord, TileKind, Vec2};

/// Render-ready state of one tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileSnapshot {
    pub id: TileId,
    pub kind: TileKind,
    pub coord: Coord,
    /// Displayed position in fractional grid units (mid-animation tiles sit
    /// between coordinates)
    pub position: Vec2,
    pub selected: bool,
    pub destroyed: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoardSnapshot {
    pub width: usize,
    pub height: usize,
    pub type_count: u8,
    pub animating: bool,
    pub selected: Option<Coord>,
    /// Board order: row-major, bottom row first
    pub tiles: Vec<TileSnapshot>,
}

impl BoardSnapshot {
    pub fn clear(&mut self) {
        self.width = 0;
        self.height = 0;
        self.type_count = 0;
        self.animating = false;
        self.selected = None;
        self.tiles.clear();
    }

    pub fn tile_at(&self, coord: Coord) -> Option<&TileSnapshot> {
        if coord.x >= self.width || coord.y >= self.height {
            return None;
        }
        self.tiles.get(coord.y * self.width + coord.x)
    }
}
