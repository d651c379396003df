//! Criterion benchmarks for the Voronoi path network.
//! Focus sizes: branch points m in {1, 10, 50, 200}.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p vankampen

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use num_complex::Complex64;
use rand::{rngs::StdRng, Rng, SeedableRng};
use vankampen::api::{segments, ZvkCfg};

fn random_points(m: usize, seed: u64) -> Vec<Complex64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..m)
        .map(|_| Complex64::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)))
        .collect()
}

fn bench_network(c: &mut Criterion) {
    let mut group = c.benchmark_group("network");
    let cfg = ZvkCfg::default();
    for &m in &[1usize, 10, 50, 200] {
        group.bench_with_input(BenchmarkId::new("segments", m), &m, |b, &m| {
            b.iter_batched(
                || random_points(m, 23),
                |pts| {
                    let _net = segments(&pts, &cfg);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_network);
criterion_main!(benches);
