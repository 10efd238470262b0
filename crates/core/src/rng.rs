//! RNG module - deterministic random source for board generation
//!
//! Board generation only needs "pick an index below N", so the grid depends on
//! the small [`RandomSource`] trait rather than on a concrete generator.
//! [`SimpleRng`] is a seeded LCG: the same seed always produces the same board,
//! which keeps tests and benches reproducible.

/// Source of uniformly distributed indices
pub trait RandomSource {
    /// Return a value in `[0, bound)`. `bound` must be non-zero.
    fn next_below(&mut self, bound: u32) -> u32;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current internal state (reseeding with it continues the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        // The low bits of an LCG have short periods; use the high half.
        (self.next_u32() >> 16) % bound
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
