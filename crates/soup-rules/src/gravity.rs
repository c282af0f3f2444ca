//! Shared one-row fall used by the soil and seed rules.

use soup_grid::{shift, Plane, PlaneMut};

/// Indicator plane: 1.0 where the cell directly below is open, else 0.0.
///
/// `open` marks open cells (1.0) of the current grid. The bottom row is
/// never open below: the shift pushes the bottom row's neighbor off-grid.
pub(crate) fn open_below(open: &Plane) -> Plane {
    shift(open, -1, 0)
}

/// The whole quantity of every cell that holds some and may fall.
///
/// `may_fall` is an indicator plane; a quantity of 0.37 moves as 0.37.
pub(crate) fn falling(quantity: &Plane, may_fall: &Plane) -> Plane {
    quantity.zip_map(may_fall, |q, m| if q > 0.0 && m > 0.0 { q } else { 0.0 })
}

/// Move `moving` one row down within `plane`, as one combined update.
pub(crate) fn drop_one_row(mut plane: PlaneMut<'_>, moving: &Plane) {
    plane.sub_plane(moving);
    plane.add_plane(&shift(moving, 1, 0));
}

/// 1.0 where `v == 0`, else 0.0.
pub(crate) fn empty_mask(plane: &Plane) -> Plane {
    plane.map(|v| if v == 0.0 { 1.0 } else { 0.0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_row_never_open() {
        let open = Plane::filled(3, 2, 1.0);
        let below = open_below(&open);
        assert_eq!(below.row(0), &[1.0, 1.0]);
        assert_eq!(below.row(2), &[0.0, 0.0]);
    }

    #[test]
    fn drop_moves_whole_quantity() {
        let mut p = Plane::from_rows(&[[0.37], [0.0]]);
        let moving = p.clone();
        drop_one_row(PlaneMut::new(&mut p), &moving);
        assert_eq!(p, Plane::from_rows(&[[0.0], [0.37]]));
    }
}
