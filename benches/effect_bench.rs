//! Benchmark for effect containers: IO, Reader, Writer, State.
//!
//! Measures construction plus run cost of chained effect computations.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use moliath::effect::{IO, Reader, State, Writer};
use moliath::typeclass::{Computation, Sum};
use std::hint::black_box;

// =============================================================================
// IO Benchmarks
// =============================================================================

fn benchmark_io_map_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("io_map_chain");

    group.bench_function("map_1", |bencher| {
        bencher.iter(|| {
            let io = IO::pure(black_box(1)).map(|value| value + 1);
            black_box(io.run())
        });
    });

    group.bench_function("map_5", |bencher| {
        bencher.iter(|| {
            let io = IO::pure(black_box(1))
                .map(|value| value + 1)
                .map(|value| value * 2)
                .map(|value| value + 3)
                .map(|value| value * 4)
                .map(|value| value + 5);
            black_box(io.run())
        });
    });

    // Built once, run many times.
    let prebuilt = IO::pure(1).bind(|value| IO::pure(value * 2)).map(|value| value + 1);
    group.bench_function("rerun_prebuilt", |bencher| {
        bencher.iter(|| black_box(prebuilt.run()));
    });

    group.bench_function("attempt", |bencher| {
        let attempt = IO::new(|| black_box(21) * 2).attempt();
        bencher.iter(|| black_box(attempt.run()));
    });

    group.finish();
}

// =============================================================================
// Reader Benchmarks
// =============================================================================

fn benchmark_reader_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("reader_chain");

    for depth in [1, 10, 100] {
        group.bench_with_input(BenchmarkId::new("bind_depth", depth), &depth, |bencher, &depth| {
            let mut reader: Reader<i64, i64> = Reader::ask();
            for _ in 0..depth {
                reader = reader.bind(|value| Reader::new(move |environment: i64| value + environment));
            }
            bencher.iter(|| black_box(reader.run(black_box(3))));
        });
    }

    group.finish();
}

// =============================================================================
// Writer Benchmarks
// =============================================================================

fn benchmark_writer_log(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("writer_log");

    for steps in [10, 100, 1_000] {
        group.bench_with_input(BenchmarkId::new("vec_log", steps), &steps, |bencher, &steps| {
            bencher.iter(|| {
                let writer = (0..steps).fold(Writer::pure(0_u64), |writer: Writer<u64, Vec<u64>>, step| {
                    writer.bind(move |value| Writer::new(value + step, vec![step]))
                });
                black_box(writer.into_parts())
            });
        });

        group.bench_with_input(BenchmarkId::new("sum_log", steps), &steps, |bencher, &steps| {
            bencher.iter(|| {
                let writer = (0..steps).fold(Writer::pure(0_u64), |writer: Writer<u64, Sum<u64>>, step| {
                    writer.bind(move |value| Writer::new(value + step, Sum(1)))
                });
                black_box(writer.into_parts())
            });
        });
    }

    group.finish();
}

// =============================================================================
// State Benchmarks
// =============================================================================

fn benchmark_state_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("state_chain");

    for depth in [10, 100, 1_000] {
        group.bench_with_input(BenchmarkId::new("modify", depth), &depth, |bencher, &depth| {
            let mut state: State<u64, ()> = State::pure(());
            for _ in 0..depth {
                state = state.then(State::modify(|count: u64| count + 1));
            }
            bencher.iter(|| black_box(state.exec(black_box(0))));
        });
    }

    group.bench_function("get_put", |bencher| {
        let counter = State::get().bind(|count: u64| State::put(count + 1));
        bencher.iter(|| black_box(counter.run(black_box(41))));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_io_map_chain,
    benchmark_reader_chain,
    benchmark_writer_log,
    benchmark_state_chain
);

criterion_main!(benches);
