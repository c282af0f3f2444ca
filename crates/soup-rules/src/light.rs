//! Downward light propagation and soil heating.

use crate::rule::TransitionRule;
use soup_core::{ChannelSet, HEAT, LIGHT, SOIL};
use soup_grid::{shift, TileGrid};

/// Moves light one row down, refills the top row from the source, and turns
/// the fraction intercepted by soil into heat.
///
/// The intercepted amount in a cell is `LIGHT * SOIL`, evaluated after the
/// shift and the top-row refill, so a fully soiled cell blocks everything.
#[derive(Clone, Debug)]
pub struct LightPropagation {
    source: f32,
}

impl LightPropagation {
    /// Create the rule with the light value written into row 0 every tick.
    pub fn new(source: f32) -> Self {
        Self { source }
    }
}

impl TransitionRule for LightPropagation {
    fn name(&self) -> &'static str {
        "light_propagation"
    }

    fn reads(&self) -> ChannelSet {
        [LIGHT, SOIL].into_iter().collect()
    }

    fn writes(&self) -> ChannelSet {
        [LIGHT, HEAT].into_iter().collect()
    }

    fn apply(&self, grid: &mut TileGrid) {
        let mut light = shift(&grid[LIGHT], 1, 0);
        light.row_mut(0).fill(self.source);
        let hit = light.zip_map(&grid[SOIL], |l, s| l * s);

        light -= &hit;
        grid.channel_mut(LIGHT).copy_from(&light);
        grid.channel_mut(HEAT).add_plane(&hit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soup_test_utils::{column, GridBuilder};

    fn rule() -> LightPropagation {
        LightPropagation::new(1.0)
    }

    #[test]
    fn travels_one_row_per_tick() {
        let mut grid = GridBuilder::new(1, 3).build();
        rule().apply(&mut grid);
        assert_eq!(grid[LIGHT], column(&[1.0, 0.0, 0.0]));
        rule().apply(&mut grid);
        assert_eq!(grid[LIGHT], column(&[1.0, 1.0, 0.0]));
    }

    #[test]
    fn soil_converts_light_to_heat() {
        let mut grid = GridBuilder::new(1, 2)
            .plane(LIGHT, &[[1.0], [0.0]])
            .plane(SOIL, &[[0.0], [0.25]])
            .build();
        rule().apply(&mut grid);
        assert_eq!(grid[LIGHT], column(&[1.0, 0.75]));
        assert_eq!(grid[HEAT], column(&[0.0, 0.25]));
    }

    #[test]
    fn full_soil_blocks_all_light() {
        let mut grid = GridBuilder::new(1, 3)
            .fill(LIGHT, 1.0)
            .cell(SOIL, 1, 0, 1.0)
            .build();
        rule().apply(&mut grid);
        rule().apply(&mut grid);
        assert_eq!(grid[LIGHT], column(&[1.0, 0.0, 0.0]));
    }

    #[test]
    fn soil_in_top_row_reduces_source() {
        let mut grid = GridBuilder::new(1, 1).fill(SOIL, 0.5).build();
        rule().apply(&mut grid);
        assert_eq!(grid[LIGHT][(0, 0)], 0.5);
        assert_eq!(grid[HEAT][(0, 0)], 0.5);
    }

    #[test]
    fn bottom_row_light_leaves_grid() {
        let mut grid = GridBuilder::new(1, 2).fill(LIGHT, 1.0).build();
        let before = grid.total(LIGHT).unwrap();
        rule().apply(&mut grid);
        assert_eq!(grid.total(LIGHT), Some(before));
        assert_eq!(grid.total(HEAT), Some(0.0));
    }
}
