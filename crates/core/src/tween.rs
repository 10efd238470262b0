//! Tween module - fixed-duration position interpolation
//!
//! A [`Tween`] moves a world position linearly from `from` to `to` over a fixed
//! duration, driven by elapsed time. It reports completion exactly once. A
//! tween is not resumable: start a new one for every movement.

use crate::types::Vec2;

/// Result of advancing a tween
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenStep {
    /// Still in flight, at this position
    Moving(Vec2),
    /// Reached the target on this advance. Reported once.
    Completed(Vec2),
    /// Already completed on an earlier advance
    Finished,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: Vec2,
    to: Vec2,
    duration_ms: u32,
    elapsed_ms: u32,
    reported: bool,
}

impl Tween {
    pub fn new(from: Vec2, to: Vec2, duration_ms: u32) -> Self {
        Self {
            from,
            to,
            duration_ms,
            elapsed_ms: 0,
            reported: false,
        }
    }

    /// Fraction of the duration elapsed, in `[0, 1]`
    pub fn progress(&self) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        self.elapsed_ms as f32 / self.duration_ms as f32
    }

    /// Current interpolated position
    pub fn position(&self) -> Vec2 {
        if self.elapsed_ms >= self.duration_ms {
            return self.to;
        }
        self.from.lerp(self.to, self.progress())
    }

    /// True once completion has been reported
    pub fn is_finished(&self) -> bool {
        self.reported
    }

    /// Advance by `dt_ms` of elapsed time.
    pub fn advance(&mut self, dt_ms: u32) -> TweenStep {
        if self.reported {
            return TweenStep::Finished;
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms).min(self.duration_ms);
        if self.elapsed_ms >= self.duration_ms {
            self.reported = true;
            TweenStep::Completed(self.to)
        } else {
            TweenStep::Moving(self.position())
        }
    }

    /// Lazy, time-ordered positions sampled every `step_ms`, ending exactly on
    /// the target.
    pub fn frames(self, step_ms: u32) -> Frames {
        Frames {
            tween: self,
            step_ms: step_ms.max(1),
        }
    }
}

/// Iterator returned by [`Tween::frames`]
#[derive(Debug, Clone)]
pub struct Frames {
    tween: Tween,
    step_ms: u32,
}

impl Iterator for Frames {
    type Item = Vec2;

    fn next(&mut self) -> Option<Vec2> {
        match self.tween.advance(self.step_ms) {
            TweenStep::Moving(pos) | TweenStep::Completed(pos) => Some(pos),
            TweenStep::Finished => None,
        }
    }
}

/// Counting barrier: opens once every expected arrival has been recorded.
///
/// Arrival order is irrelevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latch {
    remaining: u8,
}

impl Latch {
    pub fn new(count: u8) -> Self {
        Self { remaining: count }
    }

    /// Record one arrival. Returns true when this arrival opened the latch.
    pub fn arrive(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }

    pub fn is_open(&self) -> bool {
        self.remaining == 0
    }
}
