//! Seed gravity with burial.
//!
//! A seed is buried when the zero-padded 3x3 mean of soil around it is
//! (numerically) one, i.e. all nine cells are fully soiled. Cells on the
//! grid edge average in missing neighbors as zero and so can never be
//! buried. An unburied seed drops one row when the cell below holds no seed,
//! whatever its soil: seeds sink through soil until it buries them.

use crate::gravity::{drop_one_row, empty_mask, falling, open_below};
use crate::rule::TransitionRule;
use soup_core::{ChannelSet, SEED, SOIL};
use soup_grid::{neighborhood_mean_3x3, Plane, TileGrid};

/// Moves unburied seeds one row down into seed-free cells.
#[derive(Clone, Debug)]
pub struct SeedGravity {
    epsilon: f32,
}

impl SeedGravity {
    /// Create the rule. A cell is buried when its soil neighborhood mean
    /// exceeds `1 - epsilon`.
    pub fn new(epsilon: f32) -> Self {
        Self { epsilon }
    }

    /// Indicator plane of buried cells.
    pub fn buried(&self, soil: &Plane) -> Plane {
        let threshold = 1.0 - self.epsilon;
        neighborhood_mean_3x3(soil).map(|m| if m > threshold { 1.0 } else { 0.0 })
    }
}

impl TransitionRule for SeedGravity {
    fn name(&self) -> &'static str {
        "seed_gravity"
    }

    fn reads(&self) -> ChannelSet {
        [SEED, SOIL].into_iter().collect()
    }

    fn writes(&self) -> ChannelSet {
        [SEED].into_iter().collect()
    }

    fn apply(&self, grid: &mut TileGrid) {
        let seed = &grid[SEED];
        let buried = self.buried(&grid[SOIL]);
        let may_fall = open_below(&empty_mask(seed)).zip_map(&buried, |o, b| o * (1.0 - b));
        let moving = falling(seed, &may_fall);
        drop_one_row(grid.channel_mut(SEED), &moving);
    }
}
