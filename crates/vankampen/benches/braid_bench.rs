//! Criterion benchmarks for braid extraction and segment monodromy.
//! Focus sizes: strands n in {3, 8, 16}, samples per strand in {16, 128}.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p vankampen

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use num_complex::Complex64;
use rand::{rngs::StdRng, Rng, SeedableRng};
use vankampen::api::{braid_from_piecewise, braid_in_segment, BiPoly, Strand, ZvkCfg};

/// `n` random-walk strands with `samples` breakpoints at jittered times.
fn random_strands(n: usize, samples: usize, seed: u64) -> Vec<Strand> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|k| {
            let mut y = Complex64::new(k as f64, rng.gen_range(-1.0..1.0));
            let mut pts = vec![(0.0, y)];
            for i in 1..samples {
                let t = (i as f64 + rng.gen_range(-0.3..0.3)) / samples as f64;
                y += Complex64::new(rng.gen_range(-0.5..0.5), rng.gen_range(-0.5..0.5));
                pts.push((t, y));
            }
            pts.push((1.0, y));
            Strand::new(pts)
        })
        .collect()
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("braid");
    for &n in &[3usize, 8, 16] {
        for &samples in &[16usize, 128] {
            let id = format!("n{n}_s{samples}");
            group.bench_with_input(BenchmarkId::new("from_piecewise", &id), &n, |b, &n| {
                b.iter_batched(
                    || random_strands(n, samples, 17),
                    |strands| {
                        let _w = braid_from_piecewise(&strands);
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment");
    group.sample_size(10);
    let cfg = ZvkCfg::default();
    for (name, f) in [("cusp", "x^2 + y^3"), ("fermat", "y^3 + x^3 - 1")] {
        let f: BiPoly = f.parse().unwrap();
        group.bench_function(BenchmarkId::new("braid_in_segment", name), |b| {
            b.iter(|| {
                let _b = braid_in_segment(
                    &f,
                    Complex64::new(-2.0, 0.5),
                    Complex64::new(0.25, 2.0),
                    &cfg,
                )
                .unwrap();
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_extract, bench_segment);
criterion_main!(benches);
