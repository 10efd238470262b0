//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The default board is 8x8 with 5 tile kinds. Coordinates are `(x, y)` where
//! `x` grows to the right and `y` grows *upward* (world space). Renderers that
//! draw top-down are expected to flip the y axis.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `SWAP_DURATION_MS` | 150 | Duration of one swap (or swap-back) animation |
//!
//! # Examples
//!
//! ```
//! use tui_match3_types::{Axis, Coord, Direction, DEFAULT_BOARD_WIDTH};
//!
//! // Step a coordinate
//! let c = Coord::new(3, 3);
//! assert_eq!(c.step(Direction::Up), Some(Coord::new(3, 4)));
//! assert_eq!(Coord::new(0, 0).step(Direction::Left), None);
//!
//! // Axes own two opposite directions
//! assert_eq!(Axis::Vertical.directions(), [Direction::Up, Direction::Down]);
//!
//! assert_eq!(DEFAULT_BOARD_WIDTH, 8);
//! ```

use std::ops::{Add, Mul, Sub};

/// Default board width in tiles
pub const DEFAULT_BOARD_WIDTH: usize = 8;

/// Default board height in tiles
pub const DEFAULT_BOARD_HEIGHT: usize = 8;

/// Default number of distinct tile kinds
pub const DEFAULT_TYPE_COUNT: u8 = 5;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Duration of a single swap animation (both tiles move concurrently)
pub const SWAP_DURATION_MS: u32 = 150;

/// Same-kind neighbors required along one axis to register a match.
///
/// Together with the scanned tile itself this is a run of three.
pub const MIN_MATCH_NEIGHBORS: usize = 2;

/// Default tile edge length in world units
pub const DEFAULT_TILE_SIZE: f32 = 1.0;

/// Default gap between tiles in world units
pub const DEFAULT_TILE_SPACING: f32 = 0.1;

/// A tile's category (its visual/match identity), in `[0, type_count)`.
pub type TileKind = u8;

/// Grid coordinate. `y` grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Step one cell in `dir`.
    ///
    /// Returns `None` when the step would go below zero. Upper bounds are the
    /// grid's concern.
    pub fn step(self, dir: Direction) -> Option<Self> {
        let (dx, dy) = dir.delta();
        Some(Self {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }

    /// Manhattan distance between two coordinates.
    pub fn manhattan(self, other: Coord) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// True when `other` is one step away on exactly one axis.
    ///
    /// ```
    /// use tui_match3_types::Coord;
    ///
    /// assert!(Coord::new(2, 2).is_adjacent(Coord::new(2, 3)));
    /// assert!(!Coord::new(2, 2).is_adjacent(Coord::new(3, 3)));
    /// assert!(!Coord::new(2, 2).is_adjacent(Coord::new(2, 2)));
    /// ```
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.manhattan(other) == 1
    }
}

/// The four scan/step directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(dx, dy)` for one step in this direction (world space, y up)
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }
}

/// Line axis used by match detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    /// The two opposite directions along this axis
    pub fn directions(self) -> [Direction; 2] {
        match self {
            Axis::Horizontal => [Direction::Left, Direction::Right],
            Axis::Vertical => [Direction::Up, Direction::Down],
        }
    }
}

/// World-space position
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    /// Component-wise product
    pub fn scale(self, other: Vec2) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    /// Linear interpolation; `t` is clamped to `[0, 1]`.
    ///
    /// ```
    /// use tui_match3_types::Vec2;
    ///
    /// let a = Vec2::new(0.0, 0.0);
    /// let b = Vec2::new(2.0, 4.0);
    /// assert_eq!(a.lerp(b, 0.5), Vec2::new(1.0, 2.0));
    /// assert_eq!(a.lerp(b, 3.0), b);
    /// ```
    pub fn lerp(self, to: Vec2, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        self + (to - self) * t
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl From<Coord> for Vec2 {
    fn from(c: Coord) -> Self {
        Vec2::new(c.x as f32, c.y as f32)
    }
}

/// Board actions produced by input and consumed by the runner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    /// Move the keyboard cursor one tile
    Cursor(Direction),
    /// Select the tile under the cursor
    Select,
    /// Regenerate the board
    Restart,
}

/// Board construction and layout settings
///
/// `board_offset` shifts the board center away from the world origin; the grid
/// derives its own origin from it so the board stays centered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
    pub type_count: u8,
    pub tile_size: Vec2,
    pub spacing: Vec2,
    pub board_offset: Vec2,
    pub swap_duration_ms: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            type_count: DEFAULT_TYPE_COUNT,
            tile_size: Vec2::splat(DEFAULT_TILE_SIZE),
            spacing: Vec2::splat(DEFAULT_TILE_SPACING),
            board_offset: Vec2::ZERO,
            swap_duration_ms: SWAP_DURATION_MS,
        }
    }
}

impl BoardConfig {
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_type_count(mut self, type_count: u8) -> Self {
        self.type_count = type_count;
        self
    }

    pub fn with_layout(mut self, tile_size: Vec2, spacing: Vec2, board_offset: Vec2) -> Self {
        self.tile_size = tile_size;
        self.spacing = spacing;
        self.board_offset = board_offset;
        self
    }

    pub fn with_swap_duration_ms(mut self, ms: u32) -> Self {
        self.swap_duration_ms = ms;
        self
    }

    /// Distance between neighboring tile centers
    pub fn pitch(&self) -> Vec2 {
        self.tile_size + self.spacing
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}
