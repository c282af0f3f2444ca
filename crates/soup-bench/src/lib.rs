//! Benchmark profiles for the Soup sandbox.
//!
//! - [`reference_profile`]: 100x100 sandbox (10K cells)
//! - [`stress_profile`]: 316x316 sandbox (~100K cells)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use soup_engine::{Chamber, ChamberConfig, Preset};

/// 100x100 sandbox chamber config.
pub fn reference_profile(seed: u64) -> ChamberConfig {
    sandbox(100, 100, seed)
}

/// 316x316 sandbox chamber config.
pub fn stress_profile(seed: u64) -> ChamberConfig {
    sandbox(316, 316, seed)
}

fn sandbox(width: u32, height: u32, seed: u64) -> ChamberConfig {
    ChamberConfig {
        width,
        height,
        preset: Preset::Sandbox { seed },
        ..ChamberConfig::default()
    }
}

/// A chamber built from `config` and advanced `warmup` ticks, so benches
/// measure a grid with water already moving.
pub fn warmed_chamber(config: ChamberConfig, warmup: u64) -> Chamber {
    let mut chamber = Chamber::from_config(config).expect("benchmark profile must be valid");
    chamber.run(warmup);
    chamber
}
