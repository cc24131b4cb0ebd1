//! Criterion micro-benchmarks for DynamicArray growth and editing.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use simvec::{reserve, DynamicArray};
use simvec_bench::{insert_positions, mixed_ops, run_mixed};

/// Benchmark: Append 10K values to an empty array (doubling growth).
fn bench_push_back_10k(c: &mut Criterion) {
    c.bench_function("push_back_10k", |b| {
        b.iter(|| {
            let mut array = DynamicArray::new();
            for i in 0..10_000u32 {
                array.push_back(i).unwrap();
            }
            black_box(array.len());
        });
    });
}

/// Benchmark: Append 10K values after reserving the full capacity.
fn bench_push_back_reserved_10k(c: &mut Criterion) {
    c.bench_function("push_back_reserved_10k", |b| {
        b.iter(|| {
            let mut array = DynamicArray::with_reservation(reserve(10_000)).unwrap();
            for i in 0..10_000u32 {
                array.push_back(i).unwrap();
            }
            black_box(array.len());
        });
    });
}

/// Benchmark: 2K inserts at seeded random offsets.
fn bench_insert_random_2k(c: &mut Criterion) {
    let positions = insert_positions(2_000, 42);
    c.bench_function("insert_random_2k", |b| {
        b.iter(|| {
            let mut array = DynamicArray::new();
            for (i, &pos) in positions.iter().enumerate() {
                array.insert(pos, i as u32).unwrap();
            }
            black_box(array.len());
        });
    });
}

/// Benchmark: Erase from the front of a 2K array until empty.
fn bench_erase_front_2k(c: &mut Criterion) {
    let source: DynamicArray<u32> = DynamicArray::with_len(2_000).unwrap();
    c.bench_function("erase_front_2k", |b| {
        b.iter(|| {
            let mut array = source.clone();
            while !array.is_empty() {
                array.erase(0);
            }
            black_box(array.capacity());
        });
    });
}

/// Benchmark: Replay a seeded 10K-step push/insert/erase/pop script.
fn bench_mixed_10k(c: &mut Criterion) {
    let ops = mixed_ops(10_000, 7);
    c.bench_function("mixed_10k", |b| {
        b.iter(|| {
            let mut array = DynamicArray::new();
            run_mixed(&mut array, &ops).unwrap();
            black_box(array.len());
        });
    });
}

/// Benchmark: Deep copy of a 10K array.
fn bench_clone_10k(c: &mut Criterion) {
    let source: DynamicArray<u32> = DynamicArray::with_len(10_000).unwrap();
    c.bench_function("clone_10k", |b| {
        b.iter(|| {
            let copy = source.try_clone().unwrap();
            black_box(copy.len());
        });
    });
}

criterion_group!(
    benches,
    bench_push_back_10k,
    bench_push_back_reserved_10k,
    bench_insert_random_2k,
    bench_erase_front_2k,
    bench_mixed_10k,
    bench_clone_10k
);
criterion_main!(benches);
