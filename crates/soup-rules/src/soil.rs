//! Soil gravity.
//!
//! A cell holding soil falls one row when the cell directly below holds
//! none. The decision mask is computed once from the rule's input, so a cell
//! vacated this tick does not let the cell above it fall in the same tick.

use crate::gravity::{drop_one_row, empty_mask, falling, open_below};
use crate::rule::TransitionRule;
use soup_core::{ChannelSet, SOIL};
use soup_grid::TileGrid;

/// Moves soil one row down into soil-free cells.
#[derive(Clone, Debug, Default)]
pub struct SoilGravity;

impl SoilGravity {
    /// Create the soil gravity rule.
    pub fn new() -> Self {
        Self
    }
}

impl TransitionRule for SoilGravity {
    fn name(&self) -> &'static str {
        "soil_gravity"
    }

    fn reads(&self) -> ChannelSet {
        [SOIL].into_iter().collect()
    }

    fn writes(&self) -> ChannelSet {
        [SOIL].into_iter().collect()
    }

    fn apply(&self, grid: &mut TileGrid) {
        let soil = &grid[SOIL];
        let moving = falling(soil, &open_below(&empty_mask(soil)));
        drop_one_row(grid.channel_mut(SOIL), &moving);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soup_test_utils::{column, GridBuilder};

    #[test]
    fn falls_one_row() {
        let mut grid = GridBuilder::new(1, 2).plane(SOIL, &[[1.0], [0.0]]).build();
        SoilGravity.apply(&mut grid);
        assert_eq!(grid[SOIL], column(&[0.0, 1.0]));
    }

    #[test]
    fn bottom_row_stays() {
        let mut grid = GridBuilder::new(1, 1).fill(SOIL, 1.0).build();
        for _ in 0..5 {
            SoilGravity.apply(&mut grid);
        }
        assert_eq!(grid[SOIL], column(&[1.0]));
    }

    #[test]
    fn stacked_soil_rests() {
        let mut grid = GridBuilder::new(1, 3)
            .plane(SOIL, &[[0.0], [1.0], [1.0]])
            .build();
        SoilGravity.apply(&mut grid);
        assert_eq!(grid[SOIL], column(&[0.0, 1.0, 1.0]));
    }

    #[test]
    fn no_double_fall_in_one_tick() {
        // The lower unit vacates row 1, but the upper unit saw row 1 occupied.
        let mut grid = GridBuilder::new(1, 3)
            .plane(SOIL, &[[1.0], [1.0], [0.0]])
            .build();
        SoilGravity.apply(&mut grid);
        assert_eq!(grid[SOIL], column(&[1.0, 0.0, 1.0]));
        SoilGravity.apply(&mut grid);
        assert_eq!(grid[SOIL], column(&[0.0, 1.0, 1.0]));
    }

    #[test]
    fn fractional_quantity_moves_whole() {
        let mut grid = GridBuilder::new(2, 2)
            .plane(SOIL, &[[0.37, 0.5], [0.0, 0.2]])
            .build();
        SoilGravity.apply(&mut grid);
        assert_eq!(grid[SOIL].row(0), &[0.0, 0.5]);
        assert_eq!(grid[SOIL].row(1), &[0.37, 0.2]);
    }

    #[test]
    fn columns_are_independent() {
        let mut grid = GridBuilder::new(3, 2)
            .plane(SOIL, &[[1.0, 1.0, 1.0], [0.0, 1.0, 0.0]])
            .build();
        SoilGravity.apply(&mut grid);
        assert_eq!(grid[SOIL].row(0), &[0.0, 1.0, 0.0]);
        assert_eq!(grid[SOIL].row(1), &[1.0, 1.0, 1.0]);
    }
}
