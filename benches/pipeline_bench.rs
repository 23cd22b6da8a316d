//! Benchmark for seqview pipelines.
//!
//! Measures chained lazy views against the equivalent std iterator chains,
//! over slices and ordered maps.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use seqview::prelude::*;
use std::collections::BTreeMap;
use std::hint::black_box;

// =============================================================================
// Slice Pipeline Benchmarks
// =============================================================================

fn benchmark_slice_pipeline(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("slice_pipeline");

    for size in [100, 1_000, 10_000] {
        let values: Vec<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("seqview", size), &values, |bencher, values| {
            bencher.iter(|| {
                let total: i64 = values
                    .as_slice()
                    .pipe(Map(|x: &i64| x * 2))
                    .pipe(Filter(|x: &i64| x % 3 == 0))
                    .pipe(Reverse)
                    .iter()
                    .sum();
                black_box(total)
            });
        });

        group.bench_with_input(BenchmarkId::new("std_iter", size), &values, |bencher, values| {
            bencher.iter(|| {
                let total: i64 = values
                    .iter()
                    .map(|x| x * 2)
                    .filter(|x| x % 3 == 0)
                    .rev()
                    .sum();
                black_box(total)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Windowing Benchmarks
// =============================================================================

fn benchmark_windowing(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("windowing");
    let values: Vec<i64> = (0..10_000).collect();

    group.bench_function("take_drop_middle", |bencher| {
        bencher.iter(|| {
            let total: i64 = values
                .as_slice()
                .pipe(Drop(2_500))
                .pipe(Take(5_000))
                .iter()
                .sum();
            black_box(total)
        });
    });

    group.finish();
}

// =============================================================================
// Ordered-Map Projection Benchmarks
// =============================================================================

fn benchmark_map_projections(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_projections");

    for size in [100, 1_000] {
        let entries: BTreeMap<i64, i64> = (0..size).map(|key| (key, key * 10)).collect();

        group.bench_with_input(
            BenchmarkId::new("values_filtered", size),
            &entries,
            |bencher, entries| {
                bencher.iter(|| {
                    let total: i64 = entries
                        .pipe(Values)
                        .pipe(Filter(|value: &&i64| **value % 7 == 0))
                        .iter()
                        .sum();
                    black_box(total)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_slice_pipeline,
    benchmark_windowing,
    benchmark_map_projections
);
criterion_main!(benches);
