//! Fixed-radius neighborhood aggregation built from shifts.
//!
//! A [`Kernel`] is an odd-sized square weight table centered on the cell
//! being computed. [`aggregate`] evaluates it as a sum of shifted planes, so
//! out-of-bounds neighbors contribute zero (zero padding), exactly like the
//! flow rules.

use crate::plane::Plane;
use crate::shift::shift_into;
use std::error::Error;
use std::fmt;

/// Errors from kernel construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KernelError {
    /// The weight table has no rows.
    Empty,
    /// A row's length differs from the number of rows.
    NotSquare {
        /// Number of rows in the table.
        rows: usize,
        /// Length of the offending row.
        row_len: usize,
    },
    /// The side length is even, so the table has no center cell.
    EvenSide {
        /// The side length.
        side: usize,
    },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "kernel has no weights"),
            Self::NotSquare { rows, row_len } => {
                write!(f, "kernel must be square: {rows} rows but a row of {row_len}")
            }
            Self::EvenSide { side } => write!(f, "kernel side {side} must be odd"),
        }
    }
}

impl Error for KernelError {}

/// A square, odd-sized weight table with an optional divisor.
///
/// `weights[ky][kx]` applies to the neighbor at offset
/// `(ky - radius, kx - radius)` from the output cell; the weighted sum is
/// then divided by `divisor`.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    radius: u32,
    weights: Vec<f32>,
    divisor: f32,
}

impl Kernel {
    /// Build a kernel from explicit row-major weights.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError`] if the table is empty, not square, or has an
    /// even side length.
    pub fn from_weights(rows: &[Vec<f32>]) -> Result<Self, KernelError> {
        let side = rows.len();
        if side == 0 {
            return Err(KernelError::Empty);
        }
        if let Some(bad) = rows.iter().find(|r| r.len() != side) {
            return Err(KernelError::NotSquare {
                rows: side,
                row_len: bad.len(),
            });
        }
        if side % 2 == 0 {
            return Err(KernelError::EvenSide { side });
        }
        Ok(Self {
            radius: (side / 2) as u32,
            weights: rows.iter().flatten().copied().collect(),
            divisor: 1.0,
        })
    }

    /// Unweighted mean over the `(2r+1) x (2r+1)` neighborhood.
    ///
    /// The divisor is the full neighborhood size, so edge cells average in
    /// zeros for their missing neighbors.
    pub fn uniform_mean(radius: u32) -> Self {
        let side = 2 * radius as usize + 1;
        Self {
            radius,
            weights: vec![1.0; side * side],
            divisor: (side * side) as f32,
        }
    }

    /// Sum of the three cells directly below (down-left, down, down-right).
    pub fn below_sum() -> Self {
        Self {
            radius: 1,
            weights: vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0],
            divisor: 1.0,
        }
    }

    /// Neighborhood radius.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    fn side(&self) -> usize {
        2 * self.radius as usize + 1
    }
}

/// Weighted neighborhood sum of `plane` under `kernel`, zero-padded.
pub fn aggregate(plane: &Plane, kernel: &Kernel) -> Plane {
    let mut out = Plane::new(plane.rows(), plane.cols());
    let mut shifted = Plane::new(plane.rows(), plane.cols());
    let side = kernel.side();
    let radius = kernel.radius as i32;

    for (k, &w) in kernel.weights.iter().enumerate() {
        if w == 0.0 {
            continue;
        }
        let oy = (k / side) as i32 - radius;
        let ox = (k % side) as i32 - radius;
        // Reading the neighbor at (+oy, +ox) is a shift by (-oy, -ox).
        shift_into(plane, -oy, -ox, &mut shifted);
        if w != 1.0 {
            shifted *= w;
        }
        out += &shifted;
    }

    if kernel.divisor != 1.0 {
        // Divide rather than multiply by the reciprocal so a saturated
        // neighborhood lands on exactly 1.0.
        for v in out.as_mut_slice() {
            *v /= kernel.divisor;
        }
    }
    out
}

/// Zero-padded 3x3 mean of every cell.
///
/// Corner and edge cells always average in missing (zero) neighbors, so they
/// stay below the interior value of a uniform block.
pub fn neighborhood_mean_3x3(plane: &Plane) -> Plane {
    aggregate(plane, &Kernel::uniform_mean(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_sum_example_full() {
        let p = Plane::from_rows(&[[1.0, 1.0, 1.0], [1.0, 1.0, 1.0]]);
        let out = aggregate(&p, &Kernel::below_sum());
        assert_eq!(out, Plane::from_rows(&[[2.0, 3.0, 2.0], [0.0, 0.0, 0.0]]));
    }

    #[test]
    fn below_sum_example_hole() {
        let p = Plane::from_rows(&[[1.0, 1.0, 1.0], [1.0, 0.0, 1.0]]);
        let out = aggregate(&p, &Kernel::below_sum());
        assert_eq!(out, Plane::from_rows(&[[1.0, 2.0, 1.0], [0.0, 0.0, 0.0]]));
    }

    #[test]
    fn mean_of_uniform_block_is_one_only_in_interior() {
        let p = Plane::filled(3, 3, 1.0);
        let out = neighborhood_mean_3x3(&p);
        assert_eq!(out[(1, 1)], 1.0);
        assert_eq!(out[(0, 0)], 4.0 / 9.0);
        assert_eq!(out[(0, 1)], 6.0 / 9.0);
        assert!(out.as_slice().iter().all(|&v| v <= 1.0));
    }

    #[test]
    fn mean_of_single_cell() {
        let p = Plane::filled(1, 1, 0.9);
        assert_eq!(neighborhood_mean_3x3(&p)[(0, 0)], 0.9 / 9.0);
    }

    #[test]
    fn weighted_kernel_scales() {
        let k = Kernel::from_weights(&[
            vec![0.0, 0.0, 0.0],
            vec![0.0, 2.0, 0.0],
            vec![0.0, 0.0, 0.0],
        ])
        .unwrap();
        let p = Plane::from_rows(&[[0.25, 0.5]]);
        assert_eq!(aggregate(&p, &k).as_slice(), &[0.5, 1.0]);
    }

    #[test]
    fn kernel_validation() {
        assert_eq!(Kernel::from_weights(&[]), Err(KernelError::Empty));
        assert_eq!(
            Kernel::from_weights(&[vec![1.0, 1.0], vec![1.0]]),
            Err(KernelError::NotSquare { rows: 2, row_len: 1 })
        );
        assert_eq!(
            Kernel::from_weights(&[vec![1.0, 1.0], vec![1.0, 1.0]]),
            Err(KernelError::EvenSide { side: 2 })
        );
        assert_eq!(Kernel::from_weights(&[vec![1.0]]).unwrap().radius(), 0);
    }
}
