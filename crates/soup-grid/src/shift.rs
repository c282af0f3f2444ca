//! Zero-padded translation of a plane by an integer offset.
//!
//! Every flow rule is phrased in terms of [`shift`]: "move this quantity to
//! the neighbor below" is `shift(moving, 1, 0)`, and "what does the neighbor
//! below hold" is `shift(plane, -1, 0)`. Content translated past an edge is
//! destroyed and vacated cells become zero. There is no wrap-around and no
//! edge duplication.

use crate::plane::Plane;

/// Translate `plane` by `(dy, dx)`.
///
/// `out[r][c] = plane[r - dy][c - dx]` when that source cell exists,
/// otherwise `0.0`. Positive `dy` moves content down (toward higher row
/// index), positive `dx` moves it right. Offsets of any magnitude are
/// accepted; an offset at least as large as the grid extent yields an
/// all-zero plane.
///
/// ```
/// use soup_grid::{shift, Plane};
///
/// let p = Plane::from_rows(&[[1.0, 0.0], [0.0, 0.0]]);
/// assert_eq!(shift(&p, 1, 0), Plane::from_rows(&[[0.0, 0.0], [1.0, 0.0]]));
/// ```
pub fn shift(plane: &Plane, dy: i32, dx: i32) -> Plane {
    let mut out = Plane::new(plane.rows(), plane.cols());
    shift_into(plane, dy, dx, &mut out);
    out
}

/// [`shift`] into a caller-provided buffer of the same shape.
///
/// `out` is fully overwritten.
pub fn shift_into(plane: &Plane, dy: i32, dx: i32, out: &mut Plane) {
    debug_assert!(plane.same_shape(out), "shift_into on mismatched planes");
    out.fill(0.0);

    let rows = i64::from(plane.rows());
    let cols = i64::from(plane.cols());
    let (dy, dx) = (i64::from(dy), i64::from(dx));
    if dy.abs() >= rows || dx.abs() >= cols {
        return;
    }

    // Destination window that has an in-bounds source.
    let (r0, r1) = (dy.max(0), rows + dy.min(0));
    let (c0, c1) = (dx.max(0), cols + dx.min(0));
    let width = (c1 - c0) as usize;
    let src_c0 = (c0 - dx) as usize;

    for r in r0..r1 {
        let src = &plane.row((r - dy) as usize)[src_c0..src_c0 + width];
        out.row_mut(r as usize)[c0 as usize..c0 as usize + width].copy_from_slice(src);
    }
}
