//! Error types for grid construction.
//!
//! Construction is the only fallible boundary of the sandbox: once a grid
//! exists, every transition rule is total over its numeric input.

use std::error::Error;
use std::fmt;

/// A `(channels, rows, cols)` grid shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridShape {
    /// Number of channel planes.
    pub channels: usize,
    /// Number of rows (grid height).
    pub rows: usize,
    /// Number of columns (grid width).
    pub cols: usize,
}

impl GridShape {
    /// Total number of `f32` values a grid of this shape holds.
    pub fn len(&self) -> usize {
        self.channels * self.rows * self.cols
    }

    /// Returns `true` if the shape holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.channels, self.rows, self.cols)
    }
}

/// Errors arising from grid or plane construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Supplied data does not match the declared shape.
    ShapeMismatch {
        /// The shape the grid was declared with.
        expected: GridShape,
        /// Number of values actually supplied.
        actual: usize,
    },
    /// Attempted to construct a grid with zero rows or zero columns.
    EmptyGrid {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// A channel ID is not registered in the grid's channel table.
    UnknownChannel {
        /// The missing channel.
        channel: crate::ChannelId,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { expected, actual } => write!(
                f,
                "shape mismatch: expected {expected} = {} values, got {actual}",
                expected.len()
            ),
            Self::EmptyGrid { width, height } => {
                write!(f, "grid must have at least one cell, got {width}x{height}")
            }
            Self::UnknownChannel { channel } => write!(f, "unknown channel {channel}"),
        }
    }
}

impl Error for GridError {}
