//! The multi-channel quantity grid.

use crate::plane::{Plane, PlaneMut};
use indexmap::IndexMap;
use soup_core::{standard_channels, ChannelDef, ChannelId, ChannelSet, GridError, GridShape};
use std::ops::Index;

/// One plane per channel, all sharing the same `height x width` shape.
///
/// Channels form an open, ordered mapping from [`ChannelId`] to plane. The
/// grid is built from a channel table (usually [`standard_channels`]) and can
/// grow with [`insert_channel`](TileGrid::insert_channel); it never shrinks,
/// so a channel that was present when a pipeline was validated stays present.
///
/// Indexing by `ChannelId` panics for unknown channels, like slice indexing.
/// Use [`plane`](TileGrid::plane) for a fallible lookup. Mutation goes
/// through [`PlaneMut`] views, so every plane keeps the grid's shape.
#[derive(Clone, Debug, PartialEq)]
pub struct TileGrid {
    width: u32,
    height: u32,
    defs: IndexMap<ChannelId, ChannelDef>,
    planes: IndexMap<ChannelId, Plane>,
}

impl TileGrid {
    /// A zero-filled grid with the given channel table.
    ///
    /// `ChannelId(n)` is assigned to `channels[n]`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyGrid`] if `width` or `height` is zero.
    pub fn new(width: u32, height: u32, channels: Vec<ChannelDef>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }
        let mut defs = IndexMap::with_capacity(channels.len());
        let mut planes = IndexMap::with_capacity(channels.len());
        for (i, def) in channels.into_iter().enumerate() {
            let id = ChannelId(i as u32);
            defs.insert(id, def);
            planes.insert(id, Plane::new(height, width));
        }
        Ok(Self {
            width,
            height,
            defs,
            planes,
        })
    }

    /// A zero-filled grid with the 19 standard channels.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyGrid`] if `width` or `height` is zero.
    pub fn standard(width: u32, height: u32) -> Result<Self, GridError> {
        Self::new(width, height, standard_channels())
    }

    /// A grid populated from a flat `(channels, height, width)` buffer.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyGrid`] for a zero dimension, or
    /// [`GridError::ShapeMismatch`] if `data.len()` is not
    /// `channels.len() * height * width`. Nothing is constructed on error.
    pub fn from_data(
        width: u32,
        height: u32,
        channels: Vec<ChannelDef>,
        data: Vec<f32>,
    ) -> Result<Self, GridError> {
        let expected = GridShape {
            channels: channels.len(),
            rows: height as usize,
            cols: width as usize,
        };
        if data.len() != expected.len() {
            return Err(GridError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        let mut grid = Self::new(width, height, channels)?;
        let cells = expected.rows * expected.cols;
        for (plane, chunk) in grid.planes.values_mut().zip(data.chunks_exact(cells)) {
            plane.as_mut_slice().copy_from_slice(chunk);
        }
        Ok(grid)
    }

    /// Grid width (number of columns).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height (number of rows).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells in one plane.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Number of registered channels.
    pub fn channel_count(&self) -> usize {
        self.planes.len()
    }

    /// The `(channels, height, width)` shape.
    pub fn shape(&self) -> GridShape {
        GridShape {
            channels: self.channel_count(),
            rows: self.height as usize,
            cols: self.width as usize,
        }
    }

    /// Channel table in registration order.
    pub fn channels(&self) -> impl Iterator<Item = (ChannelId, &ChannelDef)> {
        self.defs.iter().map(|(&id, def)| (id, def))
    }

    /// Definition of one channel.
    pub fn def(&self, channel: ChannelId) -> Option<&ChannelDef> {
        self.defs.get(&channel)
    }

    /// The set of registered channel IDs.
    pub fn channel_set(&self) -> ChannelSet {
        self.planes.keys().copied().collect()
    }

    /// Look up a channel by name.
    pub fn channel_by_name(&self, name: &str) -> Option<ChannelId> {
        self.defs
            .iter()
            .find(|(_, def)| def.name == name)
            .map(|(&id, _)| id)
    }

    /// The plane of one channel.
    pub fn plane(&self, channel: ChannelId) -> Option<&Plane> {
        self.planes.get(&channel)
    }

    /// Edit the values of one channel's plane.
    ///
    /// The view cannot change the plane's shape; use
    /// [`set_plane`](TileGrid::set_plane) to replace a plane wholesale.
    pub fn plane_mut(&mut self, channel: ChannelId) -> Option<PlaneMut<'_>> {
        self.planes.get_mut(&channel).map(PlaneMut::new)
    }

    /// Like [`plane_mut`](TileGrid::plane_mut), for a channel known to exist.
    ///
    /// # Panics
    ///
    /// Panics if the channel is not registered, like `grid[channel]`.
    pub fn channel_mut(&mut self, channel: ChannelId) -> PlaneMut<'_> {
        match self.planes.get_mut(&channel) {
            Some(plane) => PlaneMut::new(plane),
            None => panic!("unknown channel {channel}"),
        }
    }

    /// Replace a channel's plane.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnknownChannel`] if the channel is not registered,
    /// or [`GridError::ShapeMismatch`] if `plane` is not `height x width`.
    pub fn set_plane(&mut self, channel: ChannelId, plane: Plane) -> Result<(), GridError> {
        if plane.rows() != self.height || plane.cols() != self.width {
            return Err(GridError::ShapeMismatch {
                expected: GridShape {
                    channels: 1,
                    rows: self.height as usize,
                    cols: self.width as usize,
                },
                actual: plane.len(),
            });
        }
        let slot = self
            .planes
            .get_mut(&channel)
            .ok_or(GridError::UnknownChannel { channel })?;
        *slot = plane;
        Ok(())
    }

    /// Register a new zero-filled channel after the existing ones.
    ///
    /// Returns the assigned ID: one past the largest ID in use.
    pub fn insert_channel(&mut self, def: ChannelDef) -> ChannelId {
        let id = self
            .defs
            .keys()
            .max()
            .map_or(ChannelId(0), |last| ChannelId(last.0 + 1));
        self.defs.insert(id, def);
        self.planes.insert(id, Plane::new(self.height, self.width));
        id
    }

    /// Sum of one channel over all cells, or `None` if unknown.
    pub fn total(&self, channel: ChannelId) -> Option<f64> {
        self.plane(channel).map(Plane::sum)
    }

    /// Values of every channel at one cell, in channel order.
    pub fn cell(&self, row: usize, col: usize) -> Option<Vec<f32>> {
        self.planes.values().map(|p| p.get(row, col)).collect()
    }

    /// Flatten into a `(channels, height, width)` buffer.
    ///
    /// Inverse of [`from_data`](TileGrid::from_data) for the same table.
    pub fn to_data(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.shape().len());
        for plane in self.planes.values() {
            out.extend_from_slice(plane.as_slice());
        }
        out
    }
}

impl Index<ChannelId> for TileGrid {
    type Output = Plane;

    fn index(&self, channel: ChannelId) -> &Plane {
        match self.planes.get(&channel) {
            Some(plane) => plane,
            None => panic!("unknown channel {channel}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soup_core::{ChannelRole, HEAT, N_CHANNELS, SEED, SOIL, WATER};

    #[test]
    fn standard_grid_has_all_channels() {
        let grid = TileGrid::standard(4, 3).unwrap();
        assert_eq!(grid.channel_count(), N_CHANNELS);
        assert_eq!(grid.shape().len(), N_CHANNELS * 12);
        assert_eq!(grid[SEED].rows(), 3);
        assert_eq!(grid[SEED].cols(), 4);
        assert_eq!(grid.channel_by_name("heat"), Some(HEAT));
    }

    #[test]
    fn zero_dimension_rejected() {
        assert_eq!(
            TileGrid::standard(0, 5).unwrap_err(),
            GridError::EmptyGrid {
                width: 0,
                height: 5
            }
        );
    }

    #[test]
    fn from_data_checks_length() {
        let err = TileGrid::from_data(1, 2, standard_channels(), vec![0.0; 37]).unwrap_err();
        assert_eq!(
            err,
            GridError::ShapeMismatch {
                expected: GridShape {
                    channels: N_CHANNELS,
                    rows: 2,
                    cols: 1
                },
                actual: 37,
            }
        );
    }

    #[test]
    fn from_data_is_channel_major() {
        let mut data = vec![0.0; N_CHANNELS * 2];
        // SOIL plane occupies values [2, 4).
        data[2] = 1.0;
        let grid = TileGrid::from_data(1, 2, standard_channels(), data.clone()).unwrap();
        assert_eq!(grid[SOIL].as_slice(), &[1.0, 0.0]);
        assert_eq!(grid[WATER].as_slice(), &[0.0, 0.0]);
        assert_eq!(grid.to_data(), data);
    }

    #[test]
    fn set_plane_validates() {
        let mut grid = TileGrid::standard(2, 2).unwrap();
        assert!(matches!(
            grid.set_plane(SOIL, Plane::new(3, 2)),
            Err(GridError::ShapeMismatch { .. })
        ));
        assert_eq!(
            grid.set_plane(ChannelId(99), Plane::new(2, 2)),
            Err(GridError::UnknownChannel {
                channel: ChannelId(99)
            })
        );
        grid.set_plane(SOIL, Plane::filled(2, 2, 0.5)).unwrap();
        assert_eq!(grid.total(SOIL), Some(2.0));
    }

    #[test]
    fn insert_channel_extends_table() {
        let mut grid = TileGrid::standard(2, 2).unwrap();
        let id = grid.insert_channel(ChannelDef::reserved("nectar"));
        assert_eq!(id, ChannelId(N_CHANNELS as u32));
        assert_eq!(grid.def(id).map(|d| d.role), Some(ChannelRole::Reserved));
        assert_eq!(grid[id], Plane::new(2, 2));
        assert_eq!(grid.cell(1, 1).map(|c| c.len()), Some(N_CHANNELS + 1));
        assert!(grid.channel_set().contains(id));
        assert_eq!(grid.channel_set().len(), N_CHANNELS + 1);
    }

    #[test]
    #[should_panic(expected = "unknown channel 42")]
    fn index_unknown_channel_panics() {
        let grid = TileGrid::standard(1, 1).unwrap();
        let _ = &grid[ChannelId(42)];
    }

    #[test]
    fn plane_views_keep_grid_shape() {
        let mut grid = TileGrid::standard(3, 2).unwrap();
        grid.channel_mut(SOIL)[(1, 2)] = 1.0;
        grid.plane_mut(WATER).unwrap().row_mut(0).fill(0.5);
        assert!(grid.plane_mut(ChannelId(99)).is_none());

        // Replacing a plane is only possible through the shape check.
        assert!(grid.set_plane(SOIL, Plane::new(1, 1)).is_err());
        for (id, _) in grid.channels() {
            assert_eq!((grid[id].rows(), grid[id].cols()), (2, 3));
        }
        assert_eq!(grid.total(SOIL), Some(1.0));
        assert_eq!(grid.total(WATER), Some(1.5));
    }

    #[test]
    #[should_panic(expected = "unknown channel 42")]
    fn channel_mut_unknown_panics() {
        let mut grid = TileGrid::standard(1, 1).unwrap();
        grid.channel_mut(ChannelId(42)).fill(1.0);
    }
}
