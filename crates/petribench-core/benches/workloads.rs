//! Criterion benchmarks for the benchmark workloads themselves.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use petribench_core::dataset::{build_labels, build_nested, build_records};
use petribench_core::{fibonacci, prime_sieve, run_memory_workload, Variant, MAX_FIB_TERMS};

fn bench_fibonacci(c: &mut Criterion) {
    let mut group = c.benchmark_group("fibonacci");
    for n in [10usize, 50, MAX_FIB_TERMS] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| fibonacci(black_box(n)).unwrap());
        });
    }
    group.finish();
}

fn bench_sieve(c: &mut Criterion) {
    let mut group = c.benchmark_group("prime_sieve");
    for limit in [1_000usize, 100_000, 1_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(limit), &limit, |b, &limit| {
            b.iter(|| prime_sieve(black_box(limit)));
        });
    }
    group.finish();
}

fn bench_datasets(c: &mut Criterion) {
    let mut group = c.benchmark_group("datasets");
    group.bench_function("records", |b| b.iter(build_records));
    group.bench_function("labels", |b| b.iter(build_labels));
    group.bench_function("nested", |b| b.iter(build_nested));
    group.finish();
}

fn bench_workload(c: &mut Criterion) {
    let mut group = c.benchmark_group("memory_workload");
    for variant in Variant::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(variant),
            &variant,
            |b, &variant| {
                b.iter(|| run_memory_workload(variant).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_fibonacci,
    bench_sieve,
    bench_datasets,
    bench_workload
);
criterion_main!(benches);
