//! Match consumers - what happens to a board after a swap is accepted
//!
//! The swap controller only decides *whether* a swap stands. Whatever is done
//! with the matched tiles afterwards is delegated to a [`MatchConsumer`].

use crate::error::Result;
use crate::grid::Grid;
use crate::matcher::MatchSet;

pub trait MatchConsumer {
    fn consume(&mut self, grid: &mut Grid, matches: &MatchSet) -> Result<()>;
}

impl<F> MatchConsumer for F
where
    F: FnMut(&mut Grid, &MatchSet) -> Result<()>,
{
    fn consume(&mut self, grid: &mut Grid, matches: &MatchSet) -> Result<()> {
        self(grid, matches)
    }
}

/// Marks every matched tile destroyed. Nothing is refilled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearMatches {
    cleared: usize,
}

impl ClearMatches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tiles cleared so far
    pub fn cleared(&self) -> usize {
        self.cleared
    }
}

impl MatchConsumer for ClearMatches {
    fn consume(&mut self, grid: &mut Grid, matches: &MatchSet) -> Result<()> {
        for id in matches.iter() {
            grid.mark_destroyed(id)?;
        }
        self.cleared += matches.len();
        Ok(())
    }
}
