use std::mem::size_of;

use criterion::{
    criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use rand::distributions::Uniform;
use rand::{thread_rng, Rng};

use sort_toolbox::{heap_sort, quick_sort, selection_sort};

/// Generates a vector of random data.
fn generate_random_data(amount: usize) -> Vec<u64> {
    let mut rng = thread_rng();
    let uniform = Uniform::from(0..u64::MAX);

    let mut data = Vec::with_capacity(amount);
    for _ in 0..amount {
        data.push(rng.sample(&uniform));
    }

    data
}

fn loglinear_sort_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("loglinear_sort");
    group.sample_size(10);

    static KB: usize = 1_000;

    for size in [4 * KB, 16 * KB, 64 * KB, 256 * KB] {
        group.throughput(Throughput::Bytes((size * size_of::<u64>()) as u64));
        group.bench_with_input(BenchmarkId::new("heap_sort", size), &size, |b, &size| {
            b.iter_batched(
                || generate_random_data(size),
                |mut data| heap_sort(&mut data),
                BatchSize::LargeInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("quick_sort", size), &size, |b, &size| {
            b.iter_batched(
                || generate_random_data(size),
                |mut data| quick_sort(&mut data),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn quadratic_sort_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadratic_sort");
    group.sample_size(10);

    for size in [256, 1024, 4096] {
        group.throughput(Throughput::Bytes((size * size_of::<u64>()) as u64));
        group.bench_with_input(
            BenchmarkId::new("selection_sort", size),
            &size,
            |b, &size| {
                b.iter_batched(
                    || generate_random_data(size),
                    |mut data| selection_sort(&mut data),
                    BatchSize::LargeInput,
                );
            },
        );
        // reverse-sorted input degenerates the last-element pivot
        group.bench_with_input(
            BenchmarkId::new("quick_sort_adversarial", size),
            &size,
            |b, &size| {
                b.iter_batched(
                    || (0..size as u64).rev().collect::<Vec<_>>(),
                    |mut data| quick_sort(&mut data),
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, loglinear_sort_bench, quadratic_sort_bench);
criterion_main!(benches);
