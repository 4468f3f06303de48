use criterion::{criterion_group, criterion_main, Bencher, BenchmarkId, Criterion};
use polyline_dedup::{
    dedup::{dedup_polylines, DedupOptions, DedupStrategy},
    polyline::Polyline,
};
use test_polylines::*;

fn bench_dedup(b: &mut Bencher, batch: &[Polyline<f64>], strategy: DedupStrategy) {
    let options = DedupOptions {
        tolerance: 1e-6,
        strategy,
        progress: None,
    };
    b.iter(|| dedup_polylines(batch, &options).unwrap())
}

fn dedup_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("dedup_square_grid");
    let cell_counts = &[5, 15, 30];
    for &n in cell_counts {
        let batch = square_grid_segments(n);
        let count = batch.len();
        group.bench_with_input(
            BenchmarkId::new("pairwise_scan", count),
            &batch,
            |b, batch| bench_dedup(b, batch, DedupStrategy::PairwiseScan),
        );
        group.bench_with_input(
            BenchmarkId::new("spatial_index", count),
            &batch,
            |b, batch| bench_dedup(b, batch, DedupStrategy::SpatialIndex),
        );
    }

    group.finish();
}

criterion_group!(dedup, dedup_group,);
criterion_main!(dedup);
