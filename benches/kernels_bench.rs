//! Benchmarks for the main matrix kernels across sizes
//!
//! Run with: cargo bench --bench kernels_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use densemat::prelude::*;

const SIZES: [usize; 3] = [16, 64, 128];

fn spd(ctx: &mut RandomContext, n: usize) -> Matrix {
    let a = ctx.randn(n, n);
    let gram = a.t().matmul(&a).unwrap();
    gram.plus(&Matrix::eye(n, n).scale(n as f64)).unwrap()
}

fn bench_products(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    let mut ctx = RandomContext::seeded(1);
    for &n in &SIZES {
        let a = ctx.randn(n, n);
        let b = ctx.randn(n, n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(a.matmul(b)))
        });
    }
    group.finish();
}

fn bench_decompositions(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompositions");
    group.sample_size(20);
    let mut ctx = RandomContext::seeded(2);
    for &n in &SIZES {
        let a = spd(&mut ctx, n);
        group.bench_with_input(BenchmarkId::new("det", n), &a, |bench, a| bench.iter(|| black_box(det(a))));
        group.bench_with_input(BenchmarkId::new("chol", n), &a, |bench, a| bench.iter(|| black_box(chol(a))));
        group.bench_with_input(BenchmarkId::new("eig_sym", n), &a, |bench, a| {
            bench.iter(|| black_box(eig_sym(a)))
        });
        group.bench_with_input(BenchmarkId::new("svd_values", n), &a, |bench, a| {
            bench.iter(|| black_box(svd_values(a)))
        });
    }
    group.finish();
}

fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");
    let mut ctx = RandomContext::seeded(3);
    let x = ctx.randn(10_000, 8);
    let centers: Vec<f64> = (-20..=20).map(|i| i as f64 * 0.2).collect();

    group.bench_function("var_each_col", |bench| bench.iter(|| black_box(var(&x, Norm::Sample, Dim::EachCol))));
    group.bench_function("cov", |bench| bench.iter(|| black_box(cov(&x, Norm::Sample))));
    group.bench_function("hist", |bench| bench.iter(|| black_box(hist(&x, &centers))));
    group.bench_function("sort", |bench| bench.iter(|| black_box(sort(&x, SortDirection::Ascend))));
    group.finish();
}

criterion_group!(benches, bench_products, bench_decompositions, bench_statistics);
criterion_main!(benches);
