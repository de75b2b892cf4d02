//! Criterion benchmarks for partition and arrangement at product counts.
//! Focus sizes: the page's sector options 4..128.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rectify::layout::{arrange_exact_rectangle, arrange_interleaved, Fit};
use rectify::sector::{partition_circle, SceneCfg};

fn bench_layout(c: &mut Criterion) {
    let cfg = SceneCfg::default();
    let mut group = c.benchmark_group("layout");
    for &n in &[4usize, 32, 128] {
        group.bench_with_input(BenchmarkId::new("partition", n), &n, |b, &n| {
            b.iter(|| partition_circle(n, &cfg));
        });
        group.bench_with_input(BenchmarkId::new("interleave", n), &n, |b, &n| {
            b.iter_batched(
                || partition_circle(n, &cfg),
                |s| arrange_interleaved(&s, &cfg, Fit::TrueScale),
                BatchSize::SmallInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("exact_rectangle", n), &n, |b, &n| {
            b.iter_batched(
                || partition_circle(n, &cfg),
                |s| arrange_exact_rectangle(&s, &cfg),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
