//! Benchmark for the collection operations.
//!
//! Compares kernel-derived operations against the equivalent iterator chains.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::HashMap;
use std::hint::black_box;
use underbar::collection::{contains, each, filter, map, reduce, uniq};

// =============================================================================
// Kernel Benchmarks
// =============================================================================

fn benchmark_each(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("each");

    for size in [100, 1_000, 10_000] {
        let values: Vec<u64> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("sequence", size), &values, |bencher, values| {
            bencher.iter(|| {
                let mut sum = 0;
                each(values, |value, _, _| sum += value);
                black_box(sum)
            });
        });

        let mapping: HashMap<u64, u64> = values.iter().map(|value| (*value, *value)).collect();
        group.bench_with_input(BenchmarkId::new("mapping", size), &mapping, |bencher, mapping| {
            bencher.iter(|| {
                let mut sum = 0;
                each(mapping, |value, _, _| sum += value);
                black_box(sum)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Derived Operation Benchmarks
// =============================================================================

fn benchmark_map_filter_reduce(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_filter_reduce");
    let values: Vec<u64> = (0..10_000).collect();

    group.bench_function("underbar", |bencher| {
        bencher.iter(|| {
            let doubled = map(&values, |value, _, _| value * 2);
            let kept = filter(&doubled, |value| value % 3 == 0);
            black_box(reduce(&kept, |sum, value| sum + value, 0))
        });
    });

    group.bench_function("iterator", |bencher| {
        bencher.iter(|| {
            let total: u64 = values
                .iter()
                .map(|value| value * 2)
                .filter(|value| value % 3 == 0)
                .sum();
            black_box(total)
        });
    });

    group.finish();
}

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("contains");
    let values: Vec<u32> = (0..10_000).collect();

    // Worst case: the target is the last element.
    group.bench_function("last_element", |bencher| {
        bencher.iter(|| black_box(contains(&values, &9_999)));
    });

    group.finish();
}

fn benchmark_uniq(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("uniq");

    for distinct in [8_u32, 64, 512] {
        let values: Vec<u32> = (0..2_000).map(|index| index % distinct).collect();
        group.bench_with_input(BenchmarkId::new("distinct", distinct), &values, |bencher, values| {
            bencher.iter(|| black_box(uniq(values, false)));
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_each,
    benchmark_map_filter_reduce,
    benchmark_contains,
    benchmark_uniq
);

criterion_main!(benches);
