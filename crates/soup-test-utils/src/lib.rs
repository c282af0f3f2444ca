//! Test fixtures and grid builders for Soup development.
//!
//! [`GridBuilder`] assembles a standard-channel [`TileGrid`] cell by cell or
//! plane by plane, and the `assert_*` helpers compare planes with a
//! tolerance and a readable failure message.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use soup_core::ChannelId;
use soup_grid::{Plane, TileGrid};

/// Builder for standard-channel test grids.
///
/// Every channel starts at zero. Panics on out-of-range input, which is a
/// bug in the test rather than in the code under test.
pub struct GridBuilder {
    grid: TileGrid,
}

impl GridBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            grid: TileGrid::standard(width, height).expect("test grid dimensions must be non-zero"),
        }
    }

    /// Set a whole plane from row literals.
    pub fn plane<const W: usize>(mut self, channel: ChannelId, rows: &[[f32; W]]) -> Self {
        self.grid
            .set_plane(channel, Plane::from_rows(rows))
            .expect("plane literal must match grid shape");
        self
    }

    /// Set a whole plane to one value.
    pub fn fill(mut self, channel: ChannelId, value: f32) -> Self {
        self.grid.channel_mut(channel).fill(value);
        self
    }

    /// Set one cell of one channel.
    pub fn cell(mut self, channel: ChannelId, row: usize, col: usize, value: f32) -> Self {
        self.grid.channel_mut(channel)[(row, col)] = value;
        self
    }

    /// Fill whole rows `rows` of one channel with `value`.
    pub fn rows(mut self, channel: ChannelId, rows: std::ops::Range<usize>, value: f32) -> Self {
        for r in rows {
            self.grid.channel_mut(channel).row_mut(r).fill(value);
        }
        self
    }

    pub fn build(self) -> TileGrid {
        self.grid
    }
}

/// A single-column plane, top to bottom.
pub fn column(values: &[f32]) -> Plane {
    Plane::from_vec(values.len() as u32, 1, values.to_vec()).expect("column length fits")
}

/// Assert two planes match cell by cell within `tol`.
#[track_caller]
pub fn assert_plane_close(actual: &Plane, expected: &Plane, tol: f32) {
    assert!(
        actual.same_shape(expected),
        "shape mismatch: {}x{} vs {}x{}",
        actual.rows(),
        actual.cols(),
        expected.rows(),
        expected.cols()
    );
    for (i, (a, e)) in actual
        .as_slice()
        .iter()
        .zip(expected.as_slice())
        .enumerate()
    {
        let (r, c) = (i / actual.cols() as usize, i % actual.cols() as usize);
        assert!(
            (a - e).abs() <= tol,
            "cell ({r}, {c}): got {a}, expected {e} (tol {tol})\nactual:   {:?}\nexpected: {:?}",
            actual.as_slice(),
            expected.as_slice()
        );
    }
}

/// Assert every cell of a plane is finite and non-negative.
#[track_caller]
pub fn assert_non_negative(plane: &Plane) {
    for (i, &v) in plane.as_slice().iter().enumerate() {
        assert!(v.is_finite() && v >= 0.0, "cell {i} is {v}");
    }
}
