//! The [`Chamber`] facade: one grid, one pipeline, one tick counter.
//!
//! # Ownership model
//!
//! `Chamber` is [`Send`] but not shared: every mutating method takes
//! `&mut self`, so plane references handed out by [`plane`](Chamber::plane)
//! cannot outlive the next [`step`](Chamber::step). No background threads
//! are involved; dropping the chamber drops the grid.

use crate::config::{ChamberConfig, ConfigError};
use crate::metrics::StepMetrics;
use soup_core::{standard_channels, ChannelId, GridError, TickId};
use soup_grid::{Plane, PlaneMut, TileGrid};
use soup_rules::StepPipeline;
use std::fmt;
use std::time::Instant;

// Fails to compile if any field is !Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Chamber>();
    }
};

/// A running sandbox.
///
/// # Example
///
/// ```
/// use soup_core::{SEED, SOIL};
/// use soup_engine::Chamber;
///
/// let mut chamber = Chamber::new(3, 4).unwrap();
/// chamber.plane_mut(SOIL).unwrap().row_mut(3).fill(1.0);
/// chamber.plane_mut(SEED).unwrap()[(0, 1)] = 1.0;
///
/// for _ in 0..5 {
///     chamber.step();
/// }
/// assert_eq!(chamber.current_tick().0, 5);
/// // Loose soil does not hold the seed; it sinks to the floor.
/// assert_eq!(chamber.grid()[SEED][(3, 1)], 1.0);
/// ```
pub struct Chamber {
    grid: TileGrid,
    pipeline: StepPipeline,
    tick: TickId,
    last_metrics: StepMetrics,
}

impl Chamber {
    /// A zero-filled chamber with the standard channels and rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Grid`] if `width` or `height` is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        Self::from_config(ChamberConfig {
            width,
            height,
            ..ChamberConfig::default()
        })
    }

    /// A chamber with the standard channels, populated from a flat
    /// `(channels, height, width)` buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Grid`] if the dimensions are zero or
    /// `data.len()` does not match. Nothing is constructed on error.
    pub fn with_planes(width: u32, height: u32, data: Vec<f32>) -> Result<Self, ConfigError> {
        Self::from_config(ChamberConfig {
            width,
            height,
            channels: standard_channels(),
            initial_data: Some(data),
            ..ChamberConfig::default()
        })
    }

    /// Build a chamber from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found by
    /// [`ChamberConfig::validate`].
    pub fn from_config(config: ChamberConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let ChamberConfig {
            width,
            height,
            channels,
            initial_data,
            params,
            preset,
        } = config;

        let mut grid = match initial_data {
            Some(data) => TileGrid::from_data(width, height, channels, data)?,
            None => TileGrid::new(width, height, channels)?,
        };
        preset.apply(&mut grid);

        let chamber = Self::with_pipeline(grid, StepPipeline::standard(&params))?;
        tracing::debug!(width, height, preset = preset.name(), "chamber constructed");
        Ok(chamber)
    }

    /// Wrap an existing grid with a custom pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Pipeline`] if a rule touches a channel the
    /// grid lacks.
    pub fn with_pipeline(grid: TileGrid, pipeline: StepPipeline) -> Result<Self, ConfigError> {
        pipeline.validate(&grid.channel_set())?;
        Ok(Self {
            grid,
            pipeline,
            tick: TickId::default(),
            last_metrics: StepMetrics::default(),
        })
    }

    /// Advance one tick: apply every rule in order, then bump the tick
    /// counter.
    pub fn step(&mut self) {
        let start = Instant::now();
        self.pipeline
            .run_timed(&mut self.grid, &mut self.last_metrics.rule_us);
        self.tick = self.tick.next();
        self.last_metrics.total_us = start.elapsed().as_micros() as u64;
        tracing::trace!(
            tick = self.tick.0,
            total_us = self.last_metrics.total_us,
            "tick complete"
        );
    }

    /// Step `ticks` times.
    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.step();
        }
    }

    /// Number of completed ticks.
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// Read the whole grid.
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// One channel's plane.
    pub fn plane(&self, channel: ChannelId) -> Option<&Plane> {
        self.grid.plane(channel)
    }

    /// Edit one channel's values in place, for seeding between ticks.
    pub fn plane_mut(&mut self, channel: ChannelId) -> Option<PlaneMut<'_>> {
        self.grid.plane_mut(channel)
    }

    /// Replace one channel's plane.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ShapeMismatch`] if `plane` is not the grid's
    /// shape, or [`GridError::UnknownChannel`] for an unregistered channel.
    pub fn set_plane(&mut self, channel: ChannelId, plane: Plane) -> Result<(), GridError> {
        self.grid.set_plane(channel, plane)
    }

    /// Metrics from the most recent tick.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// The rule pipeline.
    pub fn pipeline(&self) -> &StepPipeline {
        &self.pipeline
    }
}

impl fmt::Debug for Chamber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chamber")
            .field("width", &self.grid.width())
            .field("height", &self.grid.height())
            .field("channels", &self.grid.channel_count())
            .field("tick", &self.tick)
            .field("pipeline", &self.pipeline)
            .finish()
    }
}
