//! The fixed-order step pipeline and its startup validation.

use crate::absorption::Absorption;
use crate::heat::HeatDecay;
use crate::light::LightPropagation;
use crate::params::RuleParams;
use crate::rule::TransitionRule;
use crate::seed::SeedGravity;
use crate::soil::SoilGravity;
use crate::water::WaterFlow;
use soup_core::{ChannelId, ChannelSet};
use soup_grid::TileGrid;
use std::error::Error;
use std::fmt;
use std::time::Instant;

// ── Errors ─────────────────────────────────────────────────────────

/// Errors from pipeline construction and validation (startup-time, not
/// per-tick).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PipelineError {
    /// No rules registered.
    EmptyPipeline,
    /// A rule reads or writes a channel missing from the grid.
    UndefinedChannel {
        /// Which rule.
        rule: String,
        /// The missing channel.
        channel: ChannelId,
    },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPipeline => write!(f, "pipeline has no rules"),
            Self::UndefinedChannel { rule, channel } => {
                write!(f, "rule '{rule}' references undefined channel {channel}")
            }
        }
    }
}

impl Error for PipelineError {}

// ── Pipeline ───────────────────────────────────────────────────────

/// An ordered list of transition rules applied once per tick.
///
/// Each rule sees the grid exactly as the previous rule left it.
pub struct StepPipeline {
    rules: Vec<Box<dyn TransitionRule>>,
}

impl StepPipeline {
    /// Build a pipeline from rules in execution order.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::EmptyPipeline`] if `rules` is empty.
    pub fn new(rules: Vec<Box<dyn TransitionRule>>) -> Result<Self, PipelineError> {
        if rules.is_empty() {
            return Err(PipelineError::EmptyPipeline);
        }
        Ok(Self { rules })
    }

    /// The six standard rules in order: soil, water, absorption, light,
    /// heat, seed.
    pub fn standard(params: &RuleParams) -> Self {
        Self {
            rules: vec![
                Box::new(SoilGravity::new()),
                Box::new(WaterFlow::new(params.soil_water_displacement)),
                Box::new(Absorption::new(params.soil_moisture_capacity)),
                Box::new(LightPropagation::new(params.light_source)),
                Box::new(HeatDecay::new(params.heat_retention)),
                Box::new(SeedGravity::new(params.burial_epsilon)),
            ],
        }
    }

    /// Check every channel each rule declares against the defined channels,
    /// usually [`TileGrid::channel_set`].
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::UndefinedChannel`] for the first rule (in
    /// pipeline order) that touches a channel outside `defined`.
    pub fn validate(&self, defined: &ChannelSet) -> Result<(), PipelineError> {
        for rule in &self.rules {
            let missing = rule.reads().union(&rule.writes()).difference(defined);
            if let Some(channel) = missing.iter().next() {
                return Err(PipelineError::UndefinedChannel {
                    rule: rule.name().to_string(),
                    channel,
                });
            };
        }
        Ok(())
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always `false` for a constructed pipeline.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in execution order.
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Apply every rule once, in order.
    pub fn run(&self, grid: &mut TileGrid) {
        for rule in &self.rules {
            rule.apply(grid);
        }
    }

    /// Apply every rule once, recording per-rule wall time in microseconds.
    ///
    /// `timings` is cleared first and refilled in execution order, so a
    /// caller that keeps the buffer across ticks does not reallocate.
    pub fn run_timed(&self, grid: &mut TileGrid, timings: &mut Vec<(&'static str, u64)>) {
        timings.clear();
        for rule in &self.rules {
            let start = Instant::now();
            rule.apply(grid);
            let us = start.elapsed().as_micros() as u64;
            tracing::trace!(rule = rule.name(), us, "rule applied");
            timings.push((rule.name(), us));
        }
    }
}

impl fmt::Debug for StepPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepPipeline")
            .field("rules", &self.names())
            .finish()
    }
}
