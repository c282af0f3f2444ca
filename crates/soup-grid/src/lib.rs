//! Planes, the shift primitive, neighborhood aggregation, and the tile grid.
//!
//! All transition rules are phrased in terms of two primitives defined here:
//!
//! - [`shift`]: zero-padded translation of a plane by `(dy, dx)`.
//! - [`aggregate`]: weighted neighborhood sums built from shifts, with
//!   [`neighborhood_mean_3x3`] as the burial test used by the seed rule.
//!
//! [`TileGrid`] holds one [`Plane`] per channel. Row 0 is the top of the
//! world and cells outside the grid do not exist.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod neighborhood;
pub mod plane;
pub mod shift;
pub mod tile_grid;

pub use neighborhood::{aggregate, neighborhood_mean_3x3, Kernel, KernelError};
pub use plane::{Plane, PlaneMut};
pub use shift::{shift, shift_into};
pub use tile_grid::TileGrid;
