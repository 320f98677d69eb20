use criterion::{criterion_group, criterion_main, Criterion};
use numkern_core::elementary::{ceil, exp, fmod, log, pow, sin};
use std::hint::black_box;

fn bench_exp_log(c: &mut Criterion) {
    c.bench_function("exp_2_5", |b| b.iter(|| exp(black_box(2.5))));
    c.bench_function("log_12345", |b| b.iter(|| log(black_box(12345.0))));
}

fn bench_pow(c: &mut Criterion) {
    let mut group = c.benchmark_group("pow");
    group.bench_function("fractional_exponent", |b| {
        b.iter(|| pow(black_box(7.3), black_box(0.37)))
    });
    group.bench_function("negative_base_odd_exponent", |b| {
        b.iter(|| pow(black_box(-1.7), black_box(5.0)))
    });
    group.finish();
}

fn bench_sin_reduction(c: &mut Criterion) {
    let mut group = c.benchmark_group("sin_range_reduction");
    group.sample_size(20);
    group.bench_function("small_argument", |b| b.iter(|| sin(black_box(1.2))));
    group.bench_function("argument_1000", |b| b.iter(|| sin(black_box(1000.0))));
    group.finish();
}

fn bench_fmod_and_ceil(c: &mut Criterion) {
    c.bench_function("fmod_1e4_by_3", |b| {
        b.iter(|| fmod(black_box(1.0e4), black_box(3.0)))
    });
    c.bench_function("ceil_fraction", |b| b.iter(|| ceil(black_box(-1234.567))));
}

criterion_group!(
    benches,
    bench_exp_log,
    bench_pow,
    bench_sin_reduction,
    bench_fmod_and_ceil
);
criterion_main!(benches);
