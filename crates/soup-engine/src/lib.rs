//! Chamber facade, configuration, presets, and step metrics.
//!
//! [`Chamber`] is the user-facing API: it owns the grid and the standard
//! rule pipeline and advances them one tick per [`Chamber::step`] call.
//! Construction goes through [`ChamberConfig`], whose `validate()` reports
//! every structural problem as a [`ConfigError`] before anything is
//! allocated.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod chamber;
pub mod config;
pub mod metrics;
pub mod preset;

pub use chamber::Chamber;
pub use config::{ChamberConfig, ConfigError};
pub use metrics::StepMetrics;
pub use preset::Preset;
