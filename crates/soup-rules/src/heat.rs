//! Geometric heat decay.

use crate::rule::TransitionRule;
use soup_core::{ChannelSet, HEAT};
use soup_grid::TileGrid;

/// Multiplies `HEAT` by a fixed retention factor every tick.
#[derive(Clone, Debug)]
pub struct HeatDecay {
    retention: f32,
}

impl HeatDecay {
    /// Create the rule. `retention` is the fraction of heat kept per tick.
    pub fn new(retention: f32) -> Self {
        Self { retention }
    }
}

impl TransitionRule for HeatDecay {
    fn name(&self) -> &'static str {
        "heat_decay"
    }

    fn reads(&self) -> ChannelSet {
        [HEAT].into_iter().collect()
    }

    fn writes(&self) -> ChannelSet {
        [HEAT].into_iter().collect()
    }

    fn apply(&self, grid: &mut TileGrid) {
        grid.channel_mut(HEAT).scale(self.retention);
    }
}
