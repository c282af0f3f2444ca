//! Water flow with soil resistance.
//!
//! Each cell has a cavity, `1 - displacement * SOIL - WATER`, the room left
//! for more water. Water moves into the cell below, up to that cell's
//! cavity, in one synchronous pass. An oversaturated cell (negative cavity)
//! accepts nothing.

use crate::rule::TransitionRule;
use soup_core::{ChannelSet, SOIL, WATER};
use soup_grid::{shift, Plane, TileGrid};

/// Moves water one row down, limited by the cavity of the receiving cell.
#[derive(Clone, Debug)]
pub struct WaterFlow {
    soil_displacement: f32,
}

impl WaterFlow {
    /// Create the rule. `soil_displacement` is the cavity one unit of soil
    /// takes away (reference value 0.875).
    pub fn new(soil_displacement: f32) -> Self {
        Self { soil_displacement }
    }

    /// Free capacity of every cell.
    pub fn cavity(&self, soil: &Plane, water: &Plane) -> Plane {
        let d = self.soil_displacement;
        soil.zip_map(water, |s, w| 1.0 - d * s - w)
    }
}

impl TransitionRule for WaterFlow {
    fn name(&self) -> &'static str {
        "water_flow"
    }

    fn reads(&self) -> ChannelSet {
        [SOIL, WATER].into_iter().collect()
    }

    fn writes(&self) -> ChannelSet {
        [WATER].into_iter().collect()
    }

    fn apply(&self, grid: &mut TileGrid) {
        let water = &grid[WATER];
        let cavity_below = shift(&self.cavity(&grid[SOIL], water), -1, 0);
        let flow = water.zip_map(&cavity_below, |w, c| w.min(c).max(0.0));

        let mut water = grid.channel_mut(WATER);
        water.sub_plane(&flow);
        water.add_plane(&shift(&flow, 1, 0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use soup_test_utils::{assert_non_negative, assert_plane_close, column, GridBuilder};

    fn rule() -> WaterFlow {
        WaterFlow::new(0.875)
    }

    #[test]
    fn falls_into_empty_cell() {
        let mut grid = GridBuilder::new(1, 2).plane(WATER, &[[0.6], [0.0]]).build();
        rule().apply(&mut grid);
        assert_eq!(grid[WATER], column(&[0.0, 0.6]));
    }

    #[test]
    fn limited_by_water_below() {
        let mut grid = GridBuilder::new(1, 2).plane(WATER, &[[0.6], [0.7]]).build();
        rule().apply(&mut grid);
        assert_plane_close(&grid[WATER], &column(&[0.3, 1.0]), 1e-6);
    }

    #[test]
    fn soil_leaves_one_eighth() {
        let mut grid = GridBuilder::new(1, 2)
            .plane(WATER, &[[1.0], [0.0]])
            .plane(SOIL, &[[0.0], [1.0]])
            .build();
        rule().apply(&mut grid);
        assert_plane_close(&grid[WATER], &column(&[0.875, 0.125]), 1e-6);
    }

    #[test]
    fn bottom_row_retained() {
        let mut grid = GridBuilder::new(2, 1).fill(WATER, 0.4).build();
        rule().apply(&mut grid);
        assert_eq!(grid[WATER].as_slice(), &[0.4, 0.4]);
    }

    #[test]
    fn oversaturated_cell_accepts_nothing() {
        let mut grid = GridBuilder::new(1, 2)
            .plane(WATER, &[[0.5], [0.5]])
            .plane(SOIL, &[[0.0], [1.0]])
            .build();
        rule().apply(&mut grid);
        assert_eq!(grid[WATER], column(&[0.5, 0.5]));
    }

    #[test]
    fn chain_moves_synchronously() {
        // Every cell flows using the cavities from the start of the pass.
        let mut grid = GridBuilder::new(1, 3)
            .plane(WATER, &[[1.0], [1.0], [0.0]])
            .build();
        rule().apply(&mut grid);
        assert_eq!(grid[WATER], column(&[1.0, 0.0, 1.0]));
    }

    fn arb_valid_column() -> impl Strategy<Value = (Vec<f32>, Vec<f32>)> {
        (1usize..8).prop_flat_map(|n| {
            prop::collection::vec((0.0f32..=1.0, 0.0f32..=1.0), n).prop_map(|cells| {
                // Keep each cell within its own cavity: WATER <= 1 - 0.875 * SOIL.
                cells
                    .into_iter()
                    .map(|(s, frac)| (s, frac * (1.0 - 0.875 * s)))
                    .unzip::<f32, f32, Vec<f32>, Vec<f32>>()
            })
        })
    }

    proptest! {
        #[test]
        fn water_never_exceeds_cavity((soil, water) in arb_valid_column()) {
            let n = soil.len() as u32;
            let mut grid = GridBuilder::new(1, n).build();
            grid.set_plane(SOIL, Plane::from_vec(n, 1, soil).unwrap()).unwrap();
            grid.set_plane(WATER, Plane::from_vec(n, 1, water).unwrap()).unwrap();
            let before = grid.total(WATER).unwrap();

            rule().apply(&mut grid);

            assert_non_negative(&grid[WATER]);
            for (w, s) in grid[WATER].as_slice().iter().zip(grid[SOIL].as_slice()) {
                prop_assert!(w + 0.875 * s <= 1.0 + 1e-5, "water {w} soil {s}");
            }
            prop_assert!((grid.total(WATER).unwrap() - before).abs() < 1e-5);
        }
    }
}
