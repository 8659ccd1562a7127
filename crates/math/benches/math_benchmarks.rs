//! Benchmarks for dynalpha-math operations.
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use dynalpha_math::{beta, sample_covariance, weighted_sum};
use ndarray::Array1;
use rand::Rng;

fn random_array(n: usize) -> Array1<f64> {
    let mut rng = rand::thread_rng();
    Array1::from_iter((0..n).map(|_| rng.r#gen::<f64>() * 0.1 - 0.05))
}

fn bench_covariance(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_covariance");

    for size in [12, 60, 252, 1000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let x = random_array(size);
            let y = random_array(size);
            b.iter(|| sample_covariance(black_box(x.view()), black_box(y.view())).unwrap());
        });
    }

    group.finish();
}

fn bench_beta(c: &mut Criterion) {
    let mut group = c.benchmark_group("beta");

    for size in [12, 60, 252, 1000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let asset = random_array(size);
            let market = random_array(size);
            b.iter(|| beta(black_box(asset.view()), black_box(market.view())).unwrap());
        });
    }

    group.finish();
}

fn bench_weighted_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighted_sum");

    for size in [3, 12, 36] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let values = random_array(size);
            let weights = random_array(size);
            b.iter(|| weighted_sum(black_box(values.view()), black_box(weights.view())).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_covariance, bench_beta, bench_weighted_sum);
criterion_main!(benches);
