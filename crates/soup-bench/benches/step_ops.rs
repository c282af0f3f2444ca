//! Criterion benchmarks for whole-tick and per-rule cost.

use criterion::{criterion_group, criterion_main, Criterion};
use soup_bench::{reference_profile, stress_profile, warmed_chamber};
use soup_engine::Chamber;
use std::hint::black_box;

/// Benchmark: one full tick on the 10K-cell reference sandbox.
fn bench_step_reference(c: &mut Criterion) {
    let mut chamber = warmed_chamber(reference_profile(42), 10);

    c.bench_function("step_reference_10k", |b| {
        b.iter(|| {
            chamber.step();
            black_box(chamber.current_tick());
        });
    });
}

/// Benchmark: one full tick on the ~100K-cell stress sandbox.
fn bench_step_stress(c: &mut Criterion) {
    let mut chamber = warmed_chamber(stress_profile(42), 10);

    let mut group = c.benchmark_group("stress");
    group.sample_size(20);
    group.bench_function("step_stress_100k", |b| {
        b.iter(|| {
            chamber.step();
            black_box(chamber.current_tick());
        });
    });
    group.finish();
}

/// Benchmark: 100 ticks from a fresh chamber, including construction.
fn bench_hundred_ticks_cold(c: &mut Criterion) {
    c.bench_function("hundred_ticks_cold_10k", |b| {
        b.iter(|| {
            let mut chamber = Chamber::from_config(reference_profile(7)).unwrap();
            chamber.run(100);
            black_box(chamber.grid().cell_count());
        });
    });
}

criterion_group!(
    benches,
    bench_step_reference,
    bench_step_stress,
    bench_hundred_ticks_cold
);
criterion_main!(benches);
