//! Benchmarks for this crate's [`SkipList`].

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use lanelist::SkipList;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Benchmarking sizes.
const SIZES: [usize; 4] = [10, 100, 1_000, 10_000];

/// Benchmarking insertion.
#[inline]
fn insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let mut rng = StdRng::seed_from_u64(0x1234_abcd);
            b.iter_batched(
                || {
                    std::iter::repeat_with(|| rng.random::<u64>())
                        .take(size)
                        .collect::<Vec<_>>()
                },
                |values| {
                    let mut list = SkipList::new(16);
                    for value in values {
                        list.insert(value);
                    }
                    black_box(list)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

/// Benchmarking membership queries.
#[inline]
fn contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");

    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let mut rng = StdRng::seed_from_u64(0x1234_abcd);
            let list: SkipList<u64> = std::iter::repeat_with(|| rng.random()).take(size).collect();

            b.iter(|| black_box(list.contains(&rng.random())));
        });
    }
    group.finish();
}

/// Benchmarking removal.
#[inline]
fn remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");

    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let mut rng = StdRng::seed_from_u64(0x1234_abcd);
            let values: Vec<u64> = std::iter::repeat_with(|| rng.random()).take(size).collect();

            b.iter_batched(
                || values.iter().copied().collect::<SkipList<u64>>(),
                |mut list| {
                    for value in &values {
                        black_box(list.remove(value));
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, insert, contains, remove);
criterion_main!(benches);
