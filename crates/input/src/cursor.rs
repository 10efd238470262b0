//! Keyboard cursor over the board.

use crate::types::{Coord, Direction};

/// A coordinate clamped to a `width x height` board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    coord: Coord,
    width: usize,
    height: usize,
}

impl Cursor {
    /// Start in the middle of the board.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            coord: Coord::new(width / 2, height / 2),
            width,
            height,
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Move one tile; stays put at the edges. Returns whether it moved.
    pub fn step(&mut self, dir: Direction) -> bool {
        match self.coord.step(dir) {
            Some(next) if next.x < self.width && next.y < self.height => {
                self.coord = next;
                true
            }
            _ => false,
        }
    }

    /// Jump to `coord` if it is on the board (e.g. after a mouse click).
    pub fn place(&mut self, coord: Coord) -> bool {
        if coord.x < self.width && coord.y < self.height {
            self.coord = coord;
            return true;
        }
        false
    }
}
