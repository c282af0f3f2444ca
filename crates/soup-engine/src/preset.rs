//! Deterministic initial fills for a freshly built grid.
//!
//! Random presets draw from a ChaCha8 generator seeded with the preset's
//! seed, so the same preset always produces the same grid.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use soup_core::{ChannelId, ChannelRole, SEED, SOIL, WATER};
use soup_grid::TileGrid;

/// A named starting layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Preset {
    /// Leave the grid as constructed.
    #[default]
    Empty,
    /// Every driven channel filled with uniform `[0, 1)` noise.
    Random {
        /// Generator seed.
        seed: u64,
    },
    /// The bottom `depth` rows full of soil. Clamped to the grid height.
    SoilBed {
        /// Number of soil rows.
        depth: u32,
    },
    /// A soil bed a quarter of the grid deep, a band of random water in the
    /// upper third, and one seed in the top row at the center column.
    Sandbox {
        /// Generator seed for the water band.
        seed: u64,
    },
}

impl Preset {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Random { .. } => "random",
            Self::SoilBed { .. } => "soil-bed",
            Self::Sandbox { .. } => "sandbox",
        }
    }

    /// Write this preset into `grid`.
    ///
    /// Channels missing from the grid's table are skipped.
    pub fn apply(&self, grid: &mut TileGrid) {
        match *self {
            Self::Empty => {}
            Self::Random { seed } => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                let driven: Vec<ChannelId> = grid
                    .channels()
                    .filter(|(_, def)| def.role == ChannelRole::Driven)
                    .map(|(id, _)| id)
                    .collect();
                for id in driven {
                    if let Some(mut plane) = grid.plane_mut(id) {
                        for v in plane.as_mut_slice() {
                            *v = rng.gen::<f32>();
                        }
                    }
                }
            }
            Self::SoilBed { depth } => soil_bed(grid, depth),
            Self::Sandbox { seed } => {
                let height = grid.height();
                soil_bed(grid, height / 4);

                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                let band = (height / 3).max(1) as usize;
                if let Some(mut water) = grid.plane_mut(WATER) {
                    for r in 0..band {
                        for v in water.row_mut(r) {
                            *v = rng.gen::<f32>();
                        }
                    }
                }

                let center = grid.width() as usize / 2;
                if let Some(mut seed_plane) = grid.plane_mut(SEED) {
                    seed_plane[(0, center)] = 1.0;
                }
            }
        }
        tracing::debug!(preset = self.name(), "preset applied");
    }
}

fn soil_bed(grid: &mut TileGrid, depth: u32) {
    let height = grid.height();
    let top = height - depth.min(height);
    if let Some(mut soil) = grid.plane_mut(SOIL) {
        for r in top..height {
            soil.row_mut(r as usize).fill(1.0);
        }
    }
}
