//! Transition rules and the step pipeline for the Soup sandbox.
//!
//! A tick applies six local rules in a fixed order, each one a synchronous
//! pass over the whole grid:
//!
//! 1. [`SoilGravity`]: soil drops one row into empty cells.
//! 2. [`WaterFlow`]: water drops one row, limited by the cavity below.
//! 3. [`Absorption`]: water becomes moisture up to soil capacity.
//! 4. [`LightPropagation`]: light moves down; soil turns it into heat.
//! 5. [`HeatDecay`]: heat decays geometrically.
//! 6. [`SeedGravity`]: unburied seeds drop one row.
//!
//! All six are built from the zero-padded [`shift`](soup_grid::shift)
//! primitive. [`StepPipeline`] holds them as trait objects and checks their
//! declared channels against the grid before the first tick.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod absorption;
mod gravity;
pub mod heat;
pub mod light;
pub mod params;
pub mod pipeline;
pub mod rule;
pub mod seed;
pub mod soil;
pub mod water;

pub use absorption::Absorption;
pub use heat::HeatDecay;
pub use light::LightPropagation;
pub use params::{ParamsError, RuleParams};
pub use pipeline::{PipelineError, StepPipeline};
pub use rule::TransitionRule;
pub use seed::SeedGravity;
pub use soil::SoilGravity;
pub use water::WaterFlow;
