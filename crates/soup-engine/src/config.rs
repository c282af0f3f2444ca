//! Chamber configuration, validation, and error types.

use crate::preset::Preset;
use soup_core::{standard_channels, ChannelDef, ChannelId, ChannelSet, GridError, GridShape};
use soup_rules::{ParamsError, PipelineError, RuleParams, StepPipeline};
use std::error::Error;
use std::fmt;

// ── Errors ─────────────────────────────────────────────────────────

/// Errors detected during chamber construction.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Grid dimensions or initial data are invalid.
    Grid(GridError),
    /// A rule parameter is out of range.
    Params(ParamsError),
    /// Rule pipeline validation failed.
    Pipeline(PipelineError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Params(e) => write!(f, "params: {e}"),
            Self::Pipeline(e) => write!(f, "pipeline: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Params(e) => Some(e),
            Self::Pipeline(e) => Some(e),
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<ParamsError> for ConfigError {
    fn from(e: ParamsError) -> Self {
        Self::Params(e)
    }
}

impl From<PipelineError> for ConfigError {
    fn from(e: PipelineError) -> Self {
        Self::Pipeline(e)
    }
}

// ── ChamberConfig ──────────────────────────────────────────────────

/// Everything needed to construct a [`Chamber`](crate::Chamber).
///
/// `validate()` checks all structural invariants without allocating the
/// grid. The preset, if any, is applied on top of `initial_data`.
#[derive(Clone, Debug)]
pub struct ChamberConfig {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// Channel table; `ChannelId(n)` names `channels[n]`.
    pub channels: Vec<ChannelDef>,
    /// Flat `(channels, height, width)` initial values. `None` means zeros.
    pub initial_data: Option<Vec<f32>>,
    /// Rule constants.
    pub params: RuleParams,
    /// Initial layout applied after the data is loaded.
    pub preset: Preset,
}

impl Default for ChamberConfig {
    fn default() -> Self {
        Self {
            width: 32,
            height: 16,
            channels: standard_channels(),
            initial_data: None,
            params: RuleParams::default(),
            preset: Preset::Empty,
        }
    }
}

impl ChamberConfig {
    /// The `(channels, height, width)` shape this config describes.
    pub fn shape(&self) -> GridShape {
        GridShape {
            channels: self.channels.len(),
            rows: self.height as usize,
            cols: self.width as usize,
        }
    }

    /// Check the configuration for structural validity.
    ///
    /// Invariants checked:
    /// 1. Width and height are non-zero.
    /// 2. `initial_data`, when present, matches the shape exactly.
    /// 3. Rule parameters are finite and in range.
    /// 4. Every channel the standard rules touch is in the channel table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::EmptyGrid {
                width: self.width,
                height: self.height,
            }
            .into());
        }
        if let Some(data) = &self.initial_data {
            let expected = self.shape();
            if data.len() != expected.len() {
                return Err(GridError::ShapeMismatch {
                    expected,
                    actual: data.len(),
                }
                .into());
            }
        }
        self.params.validate()?;
        let defined: ChannelSet = (0..self.channels.len() as u32).map(ChannelId).collect();
        StepPipeline::standard(&self.params).validate(&defined)?;
        Ok(())
    }
}
