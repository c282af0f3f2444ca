//! Core types for the Soup sandbox.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! channel identifiers and channel table, the [`ChannelSet`] bitset used by
//! transition rules to declare their inputs and outputs, the tick counter,
//! and the grid construction errors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod channel;
pub mod error;
pub mod id;

pub use channel::{
    standard_channels, ChannelDef, ChannelRole, ChannelSet, HEAT, ID, LEAF, LIGHT, MINERAL,
    MOISTURE, N_CHANNELS, PULL_MINERAL_X, PULL_MINERAL_Y, PULL_SUGAR_X, PULL_SUGAR_Y,
    PULL_WATER_X, PULL_WATER_Y, SEED, SOIL, SUGAR, SUPPORT, SUPPRESSOR, TREE, WATER,
};
pub use error::{GridError, GridShape};
pub use id::{ChannelId, TickId};
