//! Criterion benchmarks for fixture_values.
//!
//! Benchmarks cover:
//! - Raw parallel transfer over index ranges
//! - Typed extraction (present and absent outcomes)
//! - Container clone

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fixture_values::{transfer, ValueContainer};

fn bench_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfer");

    for n in [1_000, 100_000, 1_000_000] {
        group.bench_with_input(BenchmarkId::new("all_true", n), &n, |b, &n| {
            b.iter(|| black_box(transfer(0, n, |i| black_box(i) < n)));
        });
    }

    group.finish();
}

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");

    for n in [1_000, 100_000] {
        let mut fixture = ValueContainer::with_seed(42);
        fixture.add_sparse_i64(n);
        group.bench_with_input(BenchmarkId::new("i64_present", n), &fixture, |b, f| {
            b.iter(|| black_box(f.get_all_i64()));
        });

        fixture.push(true);
        group.bench_with_input(BenchmarkId::new("i64_absent", n), &fixture, |b, f| {
            b.iter(|| black_box(f.get_all_i64()));
        });

        let mut strings = ValueContainer::with_seed(42);
        strings.add_string_of_length(n, 16);
        group.bench_with_input(BenchmarkId::new("strings", n), &strings, |b, f| {
            b.iter(|| black_box(f.get_all_strings()));
        });
    }

    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");

    for n in [1_000, 100_000] {
        let mut fixture = ValueContainer::with_seed(7);
        fixture.add_sparse_u64(n);
        group.bench_with_input(BenchmarkId::new("u64", n), &fixture, |b, f| {
            b.iter(|| black_box(f.clone()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_transfer, bench_extraction, bench_clone);
criterion_main!(benches);
