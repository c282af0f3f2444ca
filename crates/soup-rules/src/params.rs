//! Numeric constants of the transition rules.

use std::error::Error;
use std::fmt;

/// Tunable constants shared by the standard rules.
///
/// The defaults are the reference values; [`validate`](RuleParams::validate)
/// rejects settings that would break the flow rules' invariants.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleParams {
    /// Fraction of a cell's water capacity that one unit of soil occupies.
    /// Default: 0.875 (soil leaves 1/8 of the cell free).
    pub soil_water_displacement: f32,
    /// Moisture one unit of soil can hold. Default: 0.125.
    pub soil_moisture_capacity: f32,
    /// Light value forced into row 0 every tick. Default: 1.0.
    pub light_source: f32,
    /// Fraction of heat kept each tick. Default: 0.5.
    pub heat_retention: f32,
    /// A seed is buried when its 3x3 soil mean exceeds `1 - burial_epsilon`.
    /// Default: 1e-6.
    pub burial_epsilon: f32,
}

impl Default for RuleParams {
    fn default() -> Self {
        Self {
            soil_water_displacement: 0.875,
            soil_moisture_capacity: 0.125,
            light_source: 1.0,
            heat_retention: 0.5,
            burial_epsilon: 1e-6,
        }
    }
}

impl RuleParams {
    /// Set the soil moisture capacity.
    pub fn with_soil_moisture_capacity(mut self, value: f32) -> Self {
        self.soil_moisture_capacity = value;
        self
    }

    /// Set the light source value.
    pub fn with_light_source(mut self, value: f32) -> Self {
        self.light_source = value;
        self
    }

    /// Set the heat retention factor.
    pub fn with_heat_retention(mut self, value: f32) -> Self {
        self.heat_retention = value;
        self
    }

    /// Set the burial epsilon.
    pub fn with_burial_epsilon(mut self, value: f32) -> Self {
        self.burial_epsilon = value;
        self
    }

    /// Check every constant is finite and inside its valid range.
    pub fn validate(&self) -> Result<(), ParamsError> {
        let unit = [
            ("soil_water_displacement", self.soil_water_displacement),
            ("soil_moisture_capacity", self.soil_moisture_capacity),
            ("heat_retention", self.heat_retention),
        ];
        for (name, value) in unit {
            check_finite(name, value)?;
            if !(0.0..=1.0).contains(&value) {
                return Err(ParamsError::OutOfRange {
                    name,
                    value,
                    range: "[0, 1]",
                });
            }
        }
        for (name, value) in [
            ("light_source", self.light_source),
            ("burial_epsilon", self.burial_epsilon),
        ] {
            check_finite(name, value)?;
            if value < 0.0 {
                return Err(ParamsError::OutOfRange {
                    name,
                    value,
                    range: ">= 0",
                });
            }
        }
        Ok(())
    }
}

fn check_finite(name: &'static str, value: f32) -> Result<(), ParamsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParamsError::NonFinite { name, value })
    }
}

/// A rule constant failed validation.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamsError {
    /// The value is NaN or infinite.
    NonFinite {
        /// Parameter name.
        name: &'static str,
        /// The offending value.
        value: f32,
    },
    /// The value lies outside the parameter's range.
    OutOfRange {
        /// Parameter name.
        name: &'static str,
        /// The offending value.
        value: f32,
        /// Human-readable valid range.
        range: &'static str,
    },
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { name, value } => write!(f, "{name} must be finite, got {value}"),
            Self::OutOfRange { name, value, range } => {
                write!(f, "{name} must be in {range}, got {value}")
            }
        }
    }
}

impl Error for ParamsError {}
