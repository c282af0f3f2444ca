//! Absorption of water into soil moisture.
//!
//! Purely local: each cell moves `min(WATER, capacity)` from water into
//! moisture, where `capacity = soil_capacity * SOIL - MOISTURE`. A cell at or
//! beyond its capacity absorbs nothing.

use crate::rule::TransitionRule;
use soup_core::{ChannelSet, MOISTURE, SOIL, WATER};
use soup_grid::TileGrid;

/// Converts free water into moisture up to the soil's saturation capacity.
#[derive(Clone, Debug)]
pub struct Absorption {
    soil_capacity: f32,
}

impl Absorption {
    /// Create the rule. `soil_capacity` is the moisture one unit of soil
    /// holds (reference value 0.125).
    pub fn new(soil_capacity: f32) -> Self {
        Self { soil_capacity }
    }
}

impl TransitionRule for Absorption {
    fn name(&self) -> &'static str {
        "absorption"
    }

    fn reads(&self) -> ChannelSet {
        [WATER, SOIL, MOISTURE].into_iter().collect()
    }

    fn writes(&self) -> ChannelSet {
        [WATER, MOISTURE].into_iter().collect()
    }

    fn apply(&self, grid: &mut TileGrid) {
        let k = self.soil_capacity;
        let capacity = grid[SOIL].zip_map(&grid[MOISTURE], |s, m| (k * s - m).max(0.0));
        let absorbed = grid[WATER].zip_map(&capacity, |w, c| w.min(c).max(0.0));

        grid.channel_mut(WATER).sub_plane(&absorbed);
        grid.channel_mut(MOISTURE).add_plane(&absorbed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soup_test_utils::GridBuilder;

    fn rule() -> Absorption {
        Absorption::new(0.125)
    }

    #[test]
    fn absorbs_up_to_capacity() {
        let mut grid = GridBuilder::new(1, 1)
            .fill(SOIL, 1.0)
            .fill(WATER, 0.5)
            .build();
        rule().apply(&mut grid);
        assert_eq!(grid[MOISTURE][(0, 0)], 0.125);
        assert_eq!(grid[WATER][(0, 0)], 0.375);
    }

    #[test]
    fn limited_by_available_water() {
        let mut grid = GridBuilder::new(1, 1)
            .fill(SOIL, 1.0)
            .fill(WATER, 0.05)
            .build();
        rule().apply(&mut grid);
        assert_eq!(grid[MOISTURE][(0, 0)], 0.05);
        assert_eq!(grid[WATER][(0, 0)], 0.0);
    }

    #[test]
    fn saturated_cell_absorbs_nothing() {
        let mut grid = GridBuilder::new(1, 1)
            .fill(SOIL, 0.5)
            .fill(MOISTURE, 0.1)
            .fill(WATER, 0.5)
            .build();
        rule().apply(&mut grid);
        assert_eq!(grid[MOISTURE][(0, 0)], 0.1);
        assert_eq!(grid[WATER][(0, 0)], 0.5);
    }

    #[test]
    fn no_soil_no_absorption() {
        let mut grid = GridBuilder::new(2, 1).fill(WATER, 1.0).build();
        rule().apply(&mut grid);
        assert_eq!(grid.total(MOISTURE), Some(0.0));
        assert_eq!(grid.total(WATER), Some(2.0));
    }

    #[test]
    fn transfer_conserves_total() {
        let mut grid = GridBuilder::new(2, 1)
            .plane(SOIL, &[[0.6, 0.3]])
            .plane(WATER, &[[0.02, 0.9]])
            .build();
        let before = grid.total(WATER).unwrap() + grid.total(MOISTURE).unwrap();
        rule().apply(&mut grid);
        let after = grid.total(WATER).unwrap() + grid.total(MOISTURE).unwrap();
        assert!((after - before).abs() < 1e-6);
    }
}
