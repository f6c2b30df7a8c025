//! Benchmark for the function decorators.
//!
//! Measures the per-call overhead of `once` and `memoize` on their hot
//! paths, and of `throttle` while its window is closed.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use underbar::decorator::{Memoize, Once};

// =============================================================================
// Once Benchmarks
// =============================================================================

fn benchmark_once(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("once");

    group.bench_function("first_call", |bencher| {
        bencher.iter(|| {
            let cell = Once::new(|value: u64| value + 1);
            black_box(cell.call(black_box(41)))
        });
    });

    group.bench_function("latched_call", |bencher| {
        let cell = Once::new(|value: u64| value + 1);
        cell.call(41);
        bencher.iter(|| black_box(cell.call(black_box(0))));
    });

    group.finish();
}

// =============================================================================
// Memoize Benchmarks
// =============================================================================

fn fibonacci(number: u64) -> u64 {
    if number < 2 {
        number
    } else {
        fibonacci(number - 1) + fibonacci(number - 2)
    }
}

fn benchmark_memoize(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("memoize");

    for input in [10_u64, 20] {
        group.bench_with_input(BenchmarkId::new("direct", input), &input, |bencher, &input| {
            bencher.iter(|| black_box(fibonacci(black_box(input))));
        });

        let cached = Memoize::new(fibonacci);
        cached.call(input);
        group.bench_with_input(BenchmarkId::new("cache_hit", input), &input, |bencher, &input| {
            bencher.iter(|| black_box(cached.call(black_box(input))));
        });
    }

    group.bench_function("tuple_key_hit", |bencher| {
        let area = Memoize::new(|(width, height): (u32, u32)| width * height);
        area.call((640, 480));
        bencher.iter(|| black_box(area.call(black_box((640, 480)))));
    });

    group.finish();
}

// =============================================================================
// Throttle Benchmarks
// =============================================================================

#[cfg(feature = "timer")]
fn benchmark_throttle(criterion: &mut Criterion) {
    use std::time::Duration;
    use underbar::decorator::Throttle;

    let mut group = criterion.benchmark_group("throttle");

    group.bench_function("closed_window_call", |bencher| {
        let throttled = Throttle::new(
            |value: u64| {
                black_box(value);
            },
            Duration::from_secs(3600),
        );
        throttled.call(0);
        bencher.iter(|| black_box(throttled.call(black_box(1))));
    });

    group.finish();
}

#[cfg(not(feature = "timer"))]
fn benchmark_throttle(_criterion: &mut Criterion) {}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(benches, benchmark_once, benchmark_memoize, benchmark_throttle);

criterion_main!(benches);
