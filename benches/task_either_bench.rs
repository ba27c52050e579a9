//! Benchmark for `TaskEither` combinator overhead.
//!
//! Every combinator adds one boxed future per invocation. These groups
//! measure how that cost grows with pipeline length, and compare the
//! lifting boundary against a plain constructor.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use taskeither::control::Either;
use taskeither::effect::TaskEither;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("Failed to create tokio runtime")
}

fn map_chain(length: usize) -> TaskEither<String, u64> {
    (0..length).fold(TaskEither::right(1_u64), |task, _| {
        task.map(|value| value.wrapping_mul(3))
    })
}

fn flat_map_chain(length: usize) -> TaskEither<String, u64> {
    (0..length).fold(TaskEither::right(1_u64), |task, _| {
        task.flat_map(|value| TaskEither::right(value.wrapping_add(1)))
    })
}

// =============================================================================
// Construction vs Invocation
// =============================================================================

fn benchmark_invoke(criterion: &mut Criterion) {
    let runtime = runtime();
    let mut group = criterion.benchmark_group("task_either_invoke");

    group.bench_function("right", |bencher| {
        let task: TaskEither<String, i32> = TaskEither::right(42);
        bencher
            .to_async(&runtime)
            .iter(|| async { black_box(task.invoke().await) });
    });

    group.bench_function("new", |bencher| {
        let task: TaskEither<String, i32> =
            TaskEither::new(|| async { Either::Right(black_box(42)) });
        bencher
            .to_async(&runtime)
            .iter(|| async { black_box(task.invoke().await) });
    });

    group.bench_function("try_catch", |bencher| {
        let task: TaskEither<String, i32> =
            TaskEither::try_catch(|| async { Ok::<_, String>(black_box(42)) }, |thrown| {
                thrown.to_string()
            });
        bencher
            .to_async(&runtime)
            .iter(|| async { black_box(task.invoke().await) });
    });

    group.finish();
}

// =============================================================================
// Pipeline Length
// =============================================================================

fn benchmark_chain_length(criterion: &mut Criterion) {
    let runtime = runtime();
    let mut group = criterion.benchmark_group("task_either_chain_length");

    for length in [1, 5, 10, 50] {
        let mapped = map_chain(length);
        group.bench_with_input(BenchmarkId::new("map", length), &mapped, |bencher, task| {
            bencher
                .to_async(&runtime)
                .iter(|| async { black_box(task.invoke().await) });
        });

        let chained = flat_map_chain(length);
        group.bench_with_input(
            BenchmarkId::new("flat_map", length),
            &chained,
            |bencher, task| {
                bencher
                    .to_async(&runtime)
                    .iter(|| async { black_box(task.invoke().await) });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Short-circuit
// =============================================================================

fn benchmark_short_circuit(criterion: &mut Criterion) {
    let runtime = runtime();
    let mut group = criterion.benchmark_group("task_either_short_circuit");

    let failed = (0..10).fold(TaskEither::<String, u64>::left("boom".to_string()), |task, _| {
        task.flat_map(|value| TaskEither::right(value + 1))
    });

    group.bench_function("left_through_10_flat_maps", |bencher| {
        bencher
            .to_async(&runtime)
            .iter(|| async { black_box(failed.invoke().await) });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_invoke,
    benchmark_chain_length,
    benchmark_short_circuit
);
criterion_main!(benches);
