//! Benchmarks for tuple statistics and matrix multiplication

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tuplekit::{multiply, DoubleTuple, IntTuple, Matrix};

fn bench_tuple_statistics(c: &mut Criterion) {
    let ints = IntTuple::of([9, 2, 7, 4, 5, 6, 3, 8, 1]);
    let doubles = DoubleTuple::of([3.5, 1.25, 8.0, 2.75, 6.5]);

    c.bench_function("int_tuple_median_arity9", |b| {
        b.iter(|| black_box(&ints).median().unwrap())
    });

    c.bench_function("int_tuple_sum_arity9", |b| {
        b.iter(|| black_box(&ints).sum())
    });

    c.bench_function("double_tuple_min_arity5", |b| {
        b.iter(|| black_box(&doubles).min().unwrap())
    });
}

fn bench_matrix_multiply(c: &mut Criterion) {
    let a = Matrix::new(16, 16, (0..256).map(|i| i as i64).collect()).unwrap();
    let b = Matrix::new(16, 16, (0..256).rev().map(|i| i as i64).collect()).unwrap();

    c.bench_function("matrix_multiply_16x16_i64", |bench| {
        bench.iter(|| multiply(black_box(&a), black_box(&b)).unwrap())
    });
}

criterion_group!(benches, bench_tuple_statistics, bench_matrix_multiply);
criterion_main!(benches);
