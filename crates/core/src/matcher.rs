//! Match detection - contiguous same-kind runs
//!
//! Detection is tile-centric: from one tile, walk outward in each of the four
//! directions while the neighbors share its kind. An axis counts when the two
//! opposite walks together found at least `min_neighbors` tiles (two by
//! default, i.e. a run of three including the tile itself). This is a
//! neighbor count per axis, not a length check on the final set: one matching
//! neighbor on each of two axes is not a match.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::grid::Grid;
use crate::tile::{Tile, TileId};
use crate::types::{Axis, Coord, Direction, MIN_MATCH_NEIGHBORS};

/// De-duplicated set of matched tiles. Iterates in handle order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    tiles: BTreeSet<TileId>,
}

impl MatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the tile was already present
    pub fn insert(&mut self, id: TileId) -> bool {
        self.tiles.insert(id)
    }

    pub fn union_with(&mut self, other: &MatchSet) {
        self.tiles.extend(other.tiles.iter().copied());
    }

    pub fn contains(&self, id: TileId) -> bool {
        self.tiles.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = TileId> + '_ {
        self.tiles.iter().copied()
    }
}

impl Extend<TileId> for MatchSet {
    fn extend<I: IntoIterator<Item = TileId>>(&mut self, iter: I) {
        self.tiles.extend(iter);
    }
}

impl FromIterator<TileId> for MatchSet {
    fn from_iter<I: IntoIterator<Item = TileId>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchDetector {
    min_neighbors: usize,
}

impl Default for MatchDetector {
    fn default() -> Self {
        Self {
            min_neighbors: MIN_MATCH_NEIGHBORS,
        }
    }
}

impl MatchDetector {
    pub fn new(min_neighbors: usize) -> Self {
        Self { min_neighbors }
    }

    pub fn min_neighbors(&self) -> usize {
        self.min_neighbors
    }

    /// Same-kind tiles found walking from `id` in `dir`, nearest first.
    ///
    /// The walk stops at the board edge, at a different kind, or at a
    /// destroyed tile.
    pub fn scan_direction(&self, grid: &Grid, id: TileId, dir: Direction) -> Result<Vec<TileId>> {
        let origin = grid.tile(id)?;
        let coord = grid.coordinate_of(id)?;
        let mut out = Vec::new();
        scan_into(grid, origin, coord, dir, &mut out);
        Ok(out)
    }

    /// Both opposite walks along `axis`, concatenated. No threshold applied.
    pub fn line_match(&self, grid: &Grid, id: TileId, axis: Axis) -> Result<Vec<TileId>> {
        let origin = grid.tile(id)?;
        let coord = grid.coordinate_of(id)?;
        Ok(line_from(grid, origin, coord, axis))
    }

    /// Every tile in a qualifying run through `id`, including `id` itself.
    ///
    /// Empty when the tile is destroyed or no axis reaches the threshold.
    pub fn matches_at(&self, grid: &Grid, id: TileId) -> Result<MatchSet> {
        let origin = grid.tile(id)?;
        let coord = grid.coordinate_of(id)?;
        Ok(self.matches_from(grid, origin, coord))
    }

    /// Union of [`matches_at`](Self::matches_at) over every coordinate.
    pub fn all_matches(&self, grid: &Grid) -> MatchSet {
        let mut all = MatchSet::new();
        for tile in grid.tiles() {
            let found = self.matches_from(grid, tile, tile.coord());
            all.union_with(&found);
        }
        all
    }

    fn matches_from(&self, grid: &Grid, origin: &Tile, coord: Coord) -> MatchSet {
        let mut set = MatchSet::new();
        if origin.is_destroyed() {
            return set;
        }

        for axis in Axis::ALL {
            let line = line_from(grid, origin, coord, axis);
            if line.len() >= self.min_neighbors {
                set.extend(line);
            }
        }

        if !set.is_empty() {
            set.insert(origin.id());
        }
        set
    }
}

fn line_from(grid: &Grid, origin: &Tile, coord: Coord, axis: Axis) -> Vec<TileId> {
    let mut line = Vec::new();
    for dir in axis.directions() {
        scan_into(grid, origin, coord, dir, &mut line);
    }
    line
}

fn scan_into(grid: &Grid, origin: &Tile, coord: Coord, dir: Direction, out: &mut Vec<TileId>) {
    let mut cursor = coord;
    while let Some(step) = cursor.step(dir) {
        let Some(next) = grid.get(step) else {
            break;
        };
        if next.is_destroyed() || next.kind() != origin.kind() {
            break;
        }
        out.push(next.id());
        cursor = step;
    }
}
