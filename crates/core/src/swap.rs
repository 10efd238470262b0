//! Swap controller - selection and swap protocol
//!
//! The controller owns the board and is the only holder of selection state.
//!
//! ```text
//!            select(t)               select(adjacent b)
//!   Idle ───────────────▶ OneSelected(a) ─────────────────▶ Animating(Forward)
//!    ▲  ◀───────────────      │  ▲                               │
//!    │     select(a)          └──┘ select(non-adjacent b)        │ both tweens done
//!    │                             (retarget to b)               ▼
//!    │◀──────── matches found ─────────────────────── all_matches()
//!    │                                                           │ no match
//!    │◀──────── both tweens done ───── Animating(Revert) ◀───────┘ swap back
//! ```
//!
//! While animating, every selection is ignored. Animations cannot be
//! cancelled; they always run to completion through [`SwapController::tick`].

use tracing::{debug, trace, warn};

use crate::consumer::MatchConsumer;
use crate::error::Result;
use crate::grid::{Grid, TileMove};
use crate::matcher::{MatchDetector, MatchSet};
use crate::snapshot::{BoardSnapshot, TileSnapshot};
use crate::tile::TileId;
use crate::tween::{Latch, Tween, TweenStep};
use crate::types::{Coord, Vec2};

/// Which swap animation is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapPhase {
    Forward,
    Revert,
}

/// Externally visible controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapState {
    Idle,
    OneSelected(TileId),
    Animating(SwapPhase),
}

/// The two tiles of a swap and where each stood before it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapPair {
    pub a: TileId,
    pub b: TileId,
    pub a_origin: Coord,
    pub b_origin: Coord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// A swap animation is in flight
    Busy,
    /// The tile has been cleared
    NotInteractive,
}

/// What a selection did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Ignored(IgnoreReason),
    Selected(TileId),
    Deselected(TileId),
    Retargeted { from: TileId, to: TileId },
    SwapStarted(SwapPair),
}

/// How a swap ended, reported once its last animation completes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapResolution {
    /// The swap produced at least one run and stays
    Accepted { pair: SwapPair, matches: MatchSet },
    /// No run; both tiles are back at their origins
    Reverted { pair: SwapPair },
}

#[derive(Debug, Clone)]
struct Motion {
    tile: TileId,
    tween: Tween,
}

#[derive(Debug, Clone)]
struct Animation {
    phase: SwapPhase,
    pair: SwapPair,
    motions: [Motion; 2],
    latch: Latch,
}

impl Animation {
    fn new(phase: SwapPhase, pair: SwapPair, moves: [TileMove; 2], duration_ms: u32) -> Self {
        Self {
            phase,
            pair,
            motions: moves.map(|m| Motion {
                tile: m.tile,
                tween: Tween::new(m.from, m.to, duration_ms),
            }),
            latch: Latch::new(2),
        }
    }

    fn position_of(&self, id: TileId) -> Option<Vec2> {
        self.motions
            .iter()
            .find(|m| m.tile == id)
            .map(|m| m.tween.position())
    }
}

#[derive(Debug, Clone)]
enum State {
    Idle,
    OneSelected(TileId),
    Animating(Animation),
}

#[derive(Debug, Clone)]
pub struct SwapController {
    grid: Grid,
    swap_duration_ms: u32,
    state: State,
}

impl SwapController {
    pub fn new(grid: Grid, swap_duration_ms: u32) -> Self {
        Self {
            grid,
            swap_duration_ms,
            state: State::Idle,
        }
    }

    /// Judge swaps with `detector`. It becomes the board's own rule, so
    /// `grid().all_matches()` agrees with every resolution.
    pub fn with_detector(mut self, detector: MatchDetector) -> Self {
        self.grid.set_detector(detector);
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn detector(&self) -> &MatchDetector {
        self.grid.detector()
    }

    pub fn state(&self) -> SwapState {
        match &self.state {
            State::Idle => SwapState::Idle,
            State::OneSelected(id) => SwapState::OneSelected(*id),
            State::Animating(anim) => SwapState::Animating(anim.phase),
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, State::Animating(_))
    }

    /// The currently selected tile, if any
    pub fn selected(&self) -> Option<TileId> {
        match self.state {
            State::OneSelected(id) => Some(id),
            _ => None,
        }
    }

    /// Replace the board and drop any selection (restart).
    ///
    /// Refused while a swap is animating: returns `false` and keeps the
    /// current board so the in-flight swap still resolves. The new board
    /// inherits the current match rule.
    pub fn reset(&mut self, mut grid: Grid) -> bool {
        if self.is_animating() {
            debug!("restart ignored while a swap is animating");
            return false;
        }
        grid.set_detector(*self.grid.detector());
        self.grid = grid;
        self.state = State::Idle;
        true
    }

    /// Select the tile at `coord`.
    pub fn select(&mut self, coord: Coord) -> Result<SelectOutcome> {
        if self.is_animating() {
            return Ok(SelectOutcome::Ignored(IgnoreReason::Busy));
        }
        let id = self.grid.id_at(coord)?;
        self.select_tile(id)
    }

    /// Select a tile by handle.
    pub fn select_tile(&mut self, id: TileId) -> Result<SelectOutcome> {
        let pending = match &self.state {
            State::Animating(_) => return Ok(SelectOutcome::Ignored(IgnoreReason::Busy)),
            State::Idle => None,
            State::OneSelected(a) => Some(*a),
        };

        if !self.grid.tile(id)?.is_interactive() {
            return Ok(SelectOutcome::Ignored(IgnoreReason::NotInteractive));
        }

        let Some(a) = pending else {
            self.grid.set_selected(id, true)?;
            self.state = State::OneSelected(id);
            trace!(tile = %id, "selected");
            return Ok(SelectOutcome::Selected(id));
        };

        self.grid.set_selected(a, false)?;

        if a == id {
            self.state = State::Idle;
            trace!(tile = %id, "deselected");
            return Ok(SelectOutcome::Deselected(id));
        }

        if self.grid.is_adjacent(a, id)? {
            let pair = self.begin_swap(a, id)?;
            return Ok(SelectOutcome::SwapStarted(pair));
        }

        self.grid.set_selected(id, true)?;
        self.state = State::OneSelected(id);
        trace!(from = %a, to = %id, "selection retargeted");
        Ok(SelectOutcome::Retargeted { from: a, to: id })
    }

    fn begin_swap(&mut self, a: TileId, b: TileId) -> Result<SwapPair> {
        let pair = SwapPair {
            a,
            b,
            a_origin: self.grid.coordinate_of(a)?,
            b_origin: self.grid.coordinate_of(b)?,
        };
        let moves = self.grid.swap(a, b)?;
        self.state = State::Animating(Animation::new(
            SwapPhase::Forward,
            pair,
            moves,
            self.swap_duration_ms,
        ));
        debug!(a = %a, b = %b, from = ?pair.a_origin, to = ?pair.b_origin, "swap started");
        Ok(pair)
    }

    fn begin_revert(&mut self, pair: SwapPair) -> Result<()> {
        let moves = self.grid.swap(pair.a, pair.b)?;

        let a_now = self.grid.coordinate_of(pair.a)?;
        let b_now = self.grid.coordinate_of(pair.b)?;
        if a_now != pair.a_origin || b_now != pair.b_origin {
            warn!(
                a = %pair.a,
                b = %pair.b,
                ?a_now,
                ?b_now,
                "swap-back did not restore the recorded origins"
            );
        }

        self.state = State::Animating(Animation::new(
            SwapPhase::Revert,
            pair,
            moves,
            self.swap_duration_ms,
        ));
        debug!(a = %pair.a, b = %pair.b, "no match, swapping back");
        Ok(())
    }

    /// Advance any in-flight animation by `dt_ms`.
    ///
    /// Returns a resolution on the tick where a swap finishes: when the
    /// forward animation found matches, or when the swap-back has landed.
    pub fn tick(&mut self, dt_ms: u32) -> Result<Option<SwapResolution>> {
        let State::Animating(anim) = &mut self.state else {
            return Ok(None);
        };

        let mut joined = false;
        for motion in anim.motions.iter_mut() {
            if let TweenStep::Completed(_) = motion.tween.advance(dt_ms) {
                joined |= anim.latch.arrive();
            }
        }
        if !joined {
            return Ok(None);
        }

        let (phase, pair) = (anim.phase, anim.pair);
        match phase {
            SwapPhase::Forward => {
                let matches = self.grid.all_matches();
                if matches.is_empty() {
                    self.begin_revert(pair)?;
                    return Ok(None);
                }
                self.state = State::Idle;
                debug!(a = %pair.a, b = %pair.b, matched = matches.len(), "swap accepted");
                Ok(Some(SwapResolution::Accepted { pair, matches }))
            }
            SwapPhase::Revert => {
                self.state = State::Idle;
                debug!(a = %pair.a, b = %pair.b, "swap reverted");
                Ok(Some(SwapResolution::Reverted { pair }))
            }
        }
    }

    /// [`tick`](Self::tick), handing accepted matches to `consumer`.
    pub fn tick_with<C: MatchConsumer>(
        &mut self,
        dt_ms: u32,
        consumer: &mut C,
    ) -> Result<Option<SwapResolution>> {
        let resolution = self.tick(dt_ms)?;
        if let Some(SwapResolution::Accepted { matches, .. }) = &resolution {
            consumer.consume(&mut self.grid, matches)?;
        }
        Ok(resolution)
    }

    /// Where `id` is drawn right now, in world space
    pub fn display_position(&self, id: TileId) -> Result<Vec2> {
        if let Some(pos) = self.animated_position(id) {
            return Ok(pos);
        }
        Ok(self.grid.world_position(self.grid.coordinate_of(id)?))
    }

    fn animated_position(&self, id: TileId) -> Option<Vec2> {
        match &self.state {
            State::Animating(anim) => anim.position_of(id),
            _ => None,
        }
    }

    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        out.clear();
        out.width = self.grid.width();
        out.height = self.grid.height();
        out.type_count = self.grid.type_count();
        out.animating = self.is_animating();
        out.selected = self
            .selected()
            .and_then(|id| self.grid.coordinate_of(id).ok());

        for tile in self.grid.tiles() {
            let position = match self.animated_position(tile.id()) {
                Some(world) => self.grid.grid_position(world),
                None => Vec2::from(tile.coord()),
            };
            out.tiles.push(TileSnapshot {
                id: tile.id(),
                kind: tile.kind(),
                coord: tile.coord(),
                position,
                selected: tile.is_selected(),
                destroyed: tile.is_destroyed(),
            });
        }
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut s = BoardSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
