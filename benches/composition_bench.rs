//! Benchmark for composition and conversion overhead.
//!
//! Measures chains built with `then`, `and` and `or`, the cost of the `pure()`
//! and `must()` adapters, and `Context` lookups at different depths.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fnlattice::{Consumer, Context, Function, PureMustFunction, PureMustPredicate, Unary};
use std::hint::black_box;

// =============================================================================
// Sequencing Benchmarks
// =============================================================================

fn benchmark_function_then(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("function_then");

    for length in [1, 4, 16, 64] {
        let increment: Unary<u64> =
            Unary::new(|context, value: u64| (context, Ok(value.wrapping_add(1))));
        let chain = (1..length).fold(increment.clone(), |chain, _| chain.then(increment.clone()));

        group.bench_with_input(BenchmarkId::new("context", length), &chain, |bencher, chain| {
            bencher.iter(|| black_box(chain.run(Context::new(), black_box(1)).1.ok()));
        });

        let pure = chain.clone().pure().must();
        group.bench_with_input(BenchmarkId::new("pure_must", length), &pure, |bencher, pure| {
            bencher.iter(|| black_box(pure.run(black_box(1))));
        });
    }

    // Baseline: the same chain built directly from pure infallible steps
    let plain = PureMustFunction::new(|value: u64| value.wrapping_add(1));
    let direct = (1..16).fold(plain.clone(), |chain, _| chain.then(plain.clone()));
    group.bench_function("pure_must_direct_16", |bencher| {
        bencher.iter(|| black_box(direct.run(black_box(1))));
    });

    group.finish();
}

fn benchmark_consumer_then(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("consumer_then");

    for length in [1, 8, 32] {
        let tally: Consumer<u64> = Consumer::new(|context: Context, value: &u64| {
            let total = context.value::<_, u64>(&"total").copied().unwrap_or(0);
            (context.with_value("total", total + value), Ok(()))
        });
        let chain = (1..length).fold(tally.clone(), |chain, _| chain.then(tally.clone()));

        group.bench_with_input(BenchmarkId::new("tally", length), &chain, |bencher, chain| {
            bencher.iter(|| black_box(chain.run(Context::new(), black_box(&3)).0.len()));
        });
    }

    group.finish();
}

// =============================================================================
// Predicate Benchmarks
// =============================================================================

fn benchmark_predicate_logic(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("predicate_logic");

    let positive = PureMustPredicate::new(|value: &i64| *value > 0);
    let even = PureMustPredicate::new(|value: &i64| value % 2 == 0);
    let small = PureMustPredicate::new(|value: &i64| *value < 1_000);
    let composed = positive.clone().and(even.clone()).or(!small.clone());

    group.bench_function("composed", |bencher| {
        bencher.iter(|| black_box(composed.run(black_box(&42))));
    });

    // Baseline: the same expression as a plain closure
    let inline = |value: &i64| (*value > 0 && value % 2 == 0) || *value >= 1_000;
    group.bench_function("inline", |bencher| {
        bencher.iter(|| black_box(inline(black_box(&42))));
    });

    group.finish();
}

// =============================================================================
// Context Benchmarks
// =============================================================================

fn benchmark_context_lookup(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("context_lookup");

    for depth in [1_usize, 10, 100] {
        let context = (0..depth).fold(Context::new(), |context, index| context.with_value(index, index));

        group.bench_with_input(BenchmarkId::new("oldest", depth), &context, |bencher, context| {
            bencher.iter(|| black_box(context.value::<_, usize>(black_box(&0_usize)).copied()));
        });
        group.bench_with_input(BenchmarkId::new("newest", depth), &context, |bencher, context| {
            bencher.iter(|| black_box(context.value::<_, usize>(black_box(&(depth - 1))).copied()));
        });
    }

    group.bench_function("with_value", |bencher| {
        let base = Context::new().with_value("tenant", "acme");
        bencher.iter(|| black_box(base.with_value(black_box("request"), black_box(7_u32))));
    });

    group.finish();
}

fn benchmark_function_conversions(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("function_conversions");

    let square: Function<u64, u64> =
        Function::new(|context, value: u64| (context, Ok(value.wrapping_mul(value))));
    let must = square.clone().must();
    let pure = square.clone().pure();

    group.bench_function("context", |bencher| {
        bencher.iter(|| black_box(square.run(Context::new(), black_box(9)).1.ok()));
    });
    group.bench_function("must", |bencher| {
        bencher.iter(|| black_box(must.run(Context::new(), black_box(9)).1));
    });
    group.bench_function("pure", |bencher| {
        bencher.iter(|| black_box(pure.run(black_box(9)).ok()));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_function_then,
    benchmark_consumer_then,
    benchmark_predicate_logic,
    benchmark_context_lookup,
    benchmark_function_conversions
);
criterion_main!(benches);
