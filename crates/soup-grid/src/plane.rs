//! A single 2D plane of per-cell quantities.

use soup_core::{GridError, GridShape};
use std::ops::{AddAssign, Deref, Index, IndexMut, MulAssign, SubAssign};

/// A dense, row-major `rows x cols` array of `f32` values.
///
/// Row 0 is the top of the world; gravity acts toward increasing row index.
/// Element-wise operators (`+=`, `-=`, `*=`) expect operands of identical
/// shape, which every plane of one [`TileGrid`](crate::TileGrid) has.
#[derive(Clone, Debug, PartialEq)]
pub struct Plane {
    rows: u32,
    cols: u32,
    data: Vec<f32>,
}

impl Plane {
    /// A zero-filled plane.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self::filled(rows, cols, 0.0)
    }

    /// A plane with every cell set to `value`.
    pub fn filled(rows: u32, cols: u32, value: f32) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows as usize * cols as usize],
        }
    }

    /// Wrap existing row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ShapeMismatch`] if `data.len() != rows * cols`.
    pub fn from_vec(rows: u32, cols: u32, data: Vec<f32>) -> Result<Self, GridError> {
        let expected = GridShape {
            channels: 1,
            rows: rows as usize,
            cols: cols as usize,
        };
        if data.len() != expected.len() {
            return Err(GridError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a plane from fixed-width row literals.
    ///
    /// ```
    /// use soup_grid::Plane;
    ///
    /// let p = Plane::from_rows(&[[1.0, 0.0], [0.0, 2.0]]);
    /// assert_eq!(p[(1, 1)], 2.0);
    /// ```
    pub fn from_rows<const W: usize>(rows: &[[f32; W]]) -> Self {
        Self {
            rows: rows.len() as u32,
            cols: W as u32,
            data: rows.iter().flatten().copied().collect(),
        }
    }

    /// Number of rows (height).
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns (width).
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the plane has no cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether `other` has the same `rows x cols` shape.
    pub fn same_shape(&self, other: &Plane) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// Value at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row < self.rows as usize && col < self.cols as usize {
            Some(self.data[row * self.cols as usize + col])
        } else {
            None
        }
    }

    /// Row-major view of all cells.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Mutable row-major view of all cells.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// One row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[f32] {
        let w = self.cols as usize;
        &self.data[row * w..(row + 1) * w]
    }

    /// One row as a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row_mut(&mut self, row: usize) -> &mut [f32] {
        let w = self.cols as usize;
        &mut self.data[row * w..(row + 1) * w]
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// Sum of all cells, accumulated in `f64`.
    pub fn sum(&self) -> f64 {
        self.data.iter().map(|&v| v as f64).sum()
    }

    /// Largest cell value, or `None` for an empty plane.
    pub fn max(&self) -> Option<f32> {
        self.data.iter().copied().reduce(f32::max)
    }

    /// Apply `f` to every cell, producing a new plane.
    pub fn map(&self, f: impl Fn(f32) -> f32) -> Plane {
        Plane {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Combine two same-shaped planes cell by cell.
    pub fn zip_map(&self, other: &Plane, f: impl Fn(f32, f32) -> f32) -> Plane {
        debug_assert!(self.same_shape(other), "zip_map on mismatched planes");
        Plane {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }
}

impl Index<(usize, usize)> for Plane {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        assert!(col < self.cols as usize, "column {col} out of bounds");
        &self.data[row * self.cols as usize + col]
    }
}

impl IndexMut<(usize, usize)> for Plane {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        assert!(col < self.cols as usize, "column {col} out of bounds");
        &mut self.data[row * self.cols as usize + col]
    }
}

impl AddAssign<&Plane> for Plane {
    fn add_assign(&mut self, rhs: &Plane) {
        debug_assert!(self.same_shape(rhs), "add_assign on mismatched planes");
        for (a, &b) in self.data.iter_mut().zip(&rhs.data) {
            *a += b;
        }
    }
}

impl SubAssign<&Plane> for Plane {
    fn sub_assign(&mut self, rhs: &Plane) {
        debug_assert!(self.same_shape(rhs), "sub_assign on mismatched planes");
        for (a, &b) in self.data.iter_mut().zip(&rhs.data) {
            *a -= b;
        }
    }
}

impl MulAssign<f32> for Plane {
    fn mul_assign(&mut self, rhs: f32) {
        for v in &mut self.data {
            *v *= rhs;
        }
    }
}

/// Value-only mutable access to a plane whose shape is fixed.
///
/// [`TileGrid`](crate::TileGrid) hands these out instead of `&mut Plane`:
/// cells, rows and whole-plane arithmetic can be edited, but the plane
/// cannot be swapped for one of another shape. Reads go through `Deref`.
///
/// ```compile_fail
/// use soup_core::SOIL;
/// use soup_grid::{Plane, TileGrid};
///
/// let mut grid = TileGrid::standard(2, 2).unwrap();
/// *grid.channel_mut(SOIL) = Plane::new(1, 1);
/// ```
pub struct PlaneMut<'a> {
    plane: &'a mut Plane,
}

impl<'a> PlaneMut<'a> {
    /// Wrap a plane.
    pub fn new(plane: &'a mut Plane) -> Self {
        Self { plane }
    }

    /// Mutable row-major view of all cells.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        self.plane.as_mut_slice()
    }

    /// One row as a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row_mut(&mut self, row: usize) -> &mut [f32] {
        self.plane.row_mut(row)
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: f32) {
        self.plane.fill(value);
    }

    /// Overwrite every cell with the values of `src`.
    ///
    /// # Panics
    ///
    /// Panics if `src` has a different shape.
    pub fn copy_from(&mut self, src: &Plane) {
        assert!(
            self.plane.same_shape(src),
            "copy_from: {}x{} into {}x{}",
            src.rows(),
            src.cols(),
            self.plane.rows(),
            self.plane.cols()
        );
        self.plane.as_mut_slice().copy_from_slice(src.as_slice());
    }

    /// Add `other` cell by cell.
    pub fn add_plane(&mut self, other: &Plane) {
        *self.plane += other;
    }

    /// Subtract `other` cell by cell.
    pub fn sub_plane(&mut self, other: &Plane) {
        *self.plane -= other;
    }

    /// Multiply every cell by `factor`.
    pub fn scale(&mut self, factor: f32) {
        *self.plane *= factor;
    }
}

impl Deref for PlaneMut<'_> {
    type Target = Plane;

    fn deref(&self) -> &Plane {
        self.plane
    }
}

impl Index<(usize, usize)> for PlaneMut<'_> {
    type Output = f32;

    fn index(&self, cell: (usize, usize)) -> &f32 {
        &self.plane[cell]
    }
}

impl IndexMut<(usize, usize)> for PlaneMut<'_> {
    fn index_mut(&mut self, cell: (usize, usize)) -> &mut f32 {
        &mut self.plane[cell]
    }
}
