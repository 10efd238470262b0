//! Grid module - owns the tiles and the coordinate <-> position math
//!
//! Tiles are stored in an arena indexed by [`TileId`]; the board itself is a
//! flat row-major array of handles (`y * width + x`). Every coordinate holds
//! exactly one handle and every handle sits at exactly one coordinate. Swaps
//! repoint both slots before reporting any movement, so the mapping is never
//! observed half-updated.
//!
//! Coordinates: `(x, y)` with `x` in `0..width` (left to right) and `y` in
//! `0..height` (bottom to top, world space).

use arrayvec::ArrayVec;
use tracing::trace;

use crate::error::{BoardError, Result};
use crate::matcher::{MatchDetector, MatchSet};
use crate::rng::RandomSource;
use crate::tile::{Tile, TileId};
use crate::types::{BoardConfig, Coord, Direction, TileKind, Vec2};

/// One tile's movement produced by a swap, in world space.
///
/// This is what the animation hook consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileMove {
    pub tile: TileId,
    pub from: Vec2,
    pub to: Vec2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    type_count: u8,
    origin: Vec2,
    pitch: Vec2,
    /// Arena, indexed by `TileId`
    tiles: Vec<Tile>,
    /// Row-major board slots
    cells: Vec<TileId>,
    detector: MatchDetector,
}

impl Grid {
    /// Populate a new board, avoiding any pre-existing run of three.
    ///
    /// Tiles are placed column by column. Before placing `(x, y)` the kind
    /// shared by the two tiles to its left is removed from the candidates, and
    /// likewise the kind shared by the two tiles below it. When that empties
    /// the candidate set (only possible with fewer than three kinds), the full
    /// set is used instead.
    pub fn initialize<R: RandomSource>(config: &BoardConfig, rng: &mut R) -> Result<Self> {
        validate(config)?;

        let width = config.width;
        let all: Vec<TileKind> = (0..config.type_count).collect();
        let mut candidates = Vec::with_capacity(all.len());
        let mut kinds = vec![0 as TileKind; config.cell_count()];
        let at = |x: usize, y: usize| y * width + x;

        for x in 0..config.width {
            for y in 0..config.height {
                candidates.clear();
                candidates.extend_from_slice(&all);

                if x > 1 && kinds[at(x - 1, y)] == kinds[at(x - 2, y)] {
                    let run = kinds[at(x - 1, y)];
                    candidates.retain(|&k| k != run);
                }
                if y > 1 && kinds[at(x, y - 1)] == kinds[at(x, y - 2)] {
                    let run = kinds[at(x, y - 1)];
                    candidates.retain(|&k| k != run);
                }

                let pool = if candidates.is_empty() { &all } else { &candidates };
                kinds[at(x, y)] = pool[rng.next_below(pool.len() as u32) as usize];
            }
        }

        Ok(Self::build(config, &kinds))
    }

    /// Build a board from explicit kinds, row-major (`kinds[y * width + x]`).
    pub fn from_kinds(config: &BoardConfig, kinds: &[TileKind]) -> Result<Self> {
        validate(config)?;
        if kinds.len() != config.cell_count() {
            return Err(BoardError::InvalidConfig {
                reason: "kind count does not match board size",
            });
        }
        if kinds.iter().any(|&k| k >= config.type_count) {
            return Err(BoardError::InvalidConfig {
                reason: "tile kind outside [0, type_count)",
            });
        }
        Ok(Self::build(config, kinds))
    }

    fn build(config: &BoardConfig, kinds: &[TileKind]) -> Self {
        let width = config.width;
        let pitch = config.pitch();
        let span = Vec2::new(
            (config.width - 1) as f32,
            (config.height - 1) as f32,
        );
        let origin = config.board_offset - pitch.scale(span) * 0.5;

        let mut tiles = Vec::with_capacity(kinds.len());
        let mut cells = Vec::with_capacity(kinds.len());
        for (i, &kind) in kinds.iter().enumerate() {
            let id = TileId(i as u32);
            tiles.push(Tile::new(id, kind, Coord::new(i % width, i / width)));
            cells.push(id);
        }

        Self {
            width,
            height: config.height,
            type_count: config.type_count,
            origin,
            pitch,
            tiles,
            cells,
            detector: MatchDetector::default(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn type_count(&self) -> u8 {
        self.type_count
    }

    /// World position of coordinate `(0, 0)`
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Distance between neighboring tile centers (tile size + spacing)
    pub fn pitch(&self) -> Vec2 {
        self.pitch
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline(always)]
    fn index(&self, coord: Coord) -> Option<usize> {
        if coord.x >= self.width || coord.y >= self.height {
            return None;
        }
        Some(coord.y * self.width + coord.x)
    }

    fn slot(&self, coord: Coord) -> Result<usize> {
        self.index(coord).ok_or(BoardError::OutOfBounds {
            x: coord.x,
            y: coord.y,
            width: self.width,
            height: self.height,
        })
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        self.index(coord).is_some()
    }

    /// Tile at `coord`, or `None` when out of bounds
    pub fn get(&self, coord: Coord) -> Option<&Tile> {
        self.index(coord)
            .map(|idx| &self.tiles[self.cells[idx].index()])
    }

    /// Tile at `coord`, failing with `OutOfBounds`
    pub fn tile_at(&self, coord: Coord) -> Result<&Tile> {
        let idx = self.slot(coord)?;
        Ok(&self.tiles[self.cells[idx].index()])
    }

    pub fn id_at(&self, coord: Coord) -> Result<TileId> {
        Ok(self.cells[self.slot(coord)?])
    }

    /// Tile by handle, failing with `NotFound` for handles from another board
    pub fn tile(&self, id: TileId) -> Result<&Tile> {
        self.tiles
            .get(id.index())
            .ok_or(BoardError::NotFound { tile: id })
    }

    fn tile_mut(&mut self, id: TileId) -> Result<&mut Tile> {
        self.tiles
            .get_mut(id.index())
            .ok_or(BoardError::NotFound { tile: id })
    }

    /// Coordinate currently holding `id`, by identity lookup on the board.
    pub fn coordinate_of(&self, id: TileId) -> Result<Coord> {
        let recorded = self.tile(id)?.coord();
        if self.index(recorded).map(|idx| self.cells[idx]) == Some(id) {
            return Ok(recorded);
        }

        // The tile's own record disagrees with the board; trust the board.
        self.cells
            .iter()
            .position(|&slot| slot == id)
            .map(|idx| Coord::new(idx % self.width, idx / self.width))
            .ok_or(BoardError::NotFound { tile: id })
    }

    /// Exchange two tiles' positions.
    ///
    /// Both slots and both tiles' coordinates are updated before the moves are
    /// returned. Adjacency and legality are not checked here.
    pub fn swap(&mut self, a: TileId, b: TileId) -> Result<[TileMove; 2]> {
        let coord_a = self.coordinate_of(a)?;
        let coord_b = self.coordinate_of(b)?;
        let slot_a = self.slot(coord_a)?;
        let slot_b = self.slot(coord_b)?;

        self.cells[slot_a] = b;
        self.cells[slot_b] = a;
        self.tile_mut(a)?.set_coord(coord_b);
        self.tile_mut(b)?.set_coord(coord_a);

        trace!(%a, %b, ?coord_a, ?coord_b, "swapped tiles");

        let pos_a = self.world_position(coord_a);
        let pos_b = self.world_position(coord_b);
        Ok([
            TileMove {
                tile: a,
                from: pos_a,
                to: pos_b,
            },
            TileMove {
                tile: b,
                from: pos_b,
                to: pos_a,
            },
        ])
    }

    /// `origin + coord * (tile_size + spacing)`
    pub fn world_position(&self, coord: Coord) -> Vec2 {
        self.origin + self.pitch.scale(coord.into())
    }

    /// Inverse of [`world_position`](Self::world_position), in fractional grid units
    pub fn grid_position(&self, world: Vec2) -> Vec2 {
        let local = world - self.origin;
        Vec2::new(local.x / self.pitch.x, local.y / self.pitch.y)
    }

    /// The live neighbor of `id` in `dir`, if any.
    ///
    /// Edges and destroyed tiles yield `None`.
    pub fn neighbor(&self, id: TileId, dir: Direction) -> Result<Option<TileId>> {
        let coord = self.coordinate_of(id)?;
        Ok(coord
            .step(dir)
            .and_then(|next| self.get(next))
            .filter(|tile| !tile.is_destroyed())
            .map(Tile::id))
    }

    /// Up to four live neighbors (up, down, left, right order)
    pub fn neighbors(&self, id: TileId) -> Result<ArrayVec<TileId, 4>> {
        let mut out = ArrayVec::new();
        for dir in Direction::ALL {
            if let Some(n) = self.neighbor(id, dir)? {
                out.push(n);
            }
        }
        Ok(out)
    }

    /// True when the two tiles are one step apart on exactly one axis
    pub fn is_adjacent(&self, a: TileId, b: TileId) -> Result<bool> {
        Ok(self.coordinate_of(a)?.is_adjacent(self.coordinate_of(b)?))
    }

    /// Every tile currently in a run anywhere on the board, as judged by this
    /// board's detector
    pub fn all_matches(&self) -> MatchSet {
        self.detector.all_matches(self)
    }

    pub fn detector(&self) -> &MatchDetector {
        &self.detector
    }

    /// Replace the rule used by [`all_matches`](Self::all_matches).
    pub fn with_detector(mut self, detector: MatchDetector) -> Self {
        self.detector = detector;
        self
    }

    pub(crate) fn set_detector(&mut self, detector: MatchDetector) {
        self.detector = detector;
    }

    /// Flag a tile as cleared. It stops matching and stops being a neighbor.
    pub fn mark_destroyed(&mut self, id: TileId) -> Result<()> {
        self.tile_mut(id)?.destroy();
        Ok(())
    }

    pub(crate) fn set_selected(&mut self, id: TileId, selected: bool) -> Result<()> {
        self.tile_mut(id)?.set_selected(selected);
        Ok(())
    }

    /// Tiles in board order (row-major, bottom row first)
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.cells.iter().map(move |id| &self.tiles[id.index()])
    }

    /// Kinds in board order (row-major, bottom row first)
    pub fn kinds(&self) -> Vec<TileKind> {
        self.tiles().map(Tile::kind).collect()
    }

    /// Check the coordinate <-> tile bijection.
    pub fn is_consistent(&self) -> bool {
        let mut seen = vec![false; self.tiles.len()];
        for (idx, &id) in self.cells.iter().enumerate() {
            let Some(tile) = self.tiles.get(id.index()) else {
                return false;
            };
            if std::mem::replace(&mut seen[id.index()], true) {
                return false;
            }
            if self.index(tile.coord()) != Some(idx) {
                return false;
            }
        }
        seen.iter().all(|&s| s)
    }
}

fn validate(config: &BoardConfig) -> Result<()> {
    if config.width == 0 || config.height == 0 {
        return Err(BoardError::InvalidConfig {
            reason: "board width and height must be positive",
        });
    }
    if config.type_count == 0 {
        return Err(BoardError::InvalidConfig {
            reason: "type count must be positive",
        });
    }
    let pitch = config.pitch();
    if !(pitch.x > 0.0 && pitch.y > 0.0) {
        return Err(BoardError::InvalidConfig {
            reason: "tile size plus spacing must be positive",
        });
    }
    Ok(())
}
