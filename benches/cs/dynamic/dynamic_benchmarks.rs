use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dynprog::cs::dynamic::{
    fibonacci, knapsack, lcs_length, matrix_chain_cost, min_coins_for_change,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn bench_fibonacci(c: &mut Criterion) {
    c.bench_function("fibonacci_186", |b| b.iter(|| fibonacci(black_box(186))));
}

fn bench_knapsack(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack");
    let mut rng = StdRng::seed_from_u64(42);

    for &items in &[10usize, 100, 500] {
        let values: Vec<u64> = (0..items).map(|_| rng.gen_range(1..=1000)).collect();
        let weights: Vec<usize> = (0..items).map(|_| rng.gen_range(1..=100)).collect();
        let capacity = items * 25;

        group.bench_with_input(BenchmarkId::from_parameter(items), &items, |b, _| {
            b.iter(|| knapsack(black_box(&values), black_box(&weights), capacity))
        });
    }
    group.finish();
}

fn bench_lcs(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcs_length");
    let mut rng = StdRng::seed_from_u64(42);

    for &len in &[100usize, 1000] {
        let a: String = (0..len).map(|_| rng.gen_range(b'A'..=b'Z') as char).collect();
        let b: String = (0..len).map(|_| rng.gen_range(b'A'..=b'Z') as char).collect();

        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bench, _| {
            bench.iter(|| lcs_length(black_box(&a), black_box(&b)))
        });
    }
    group.finish();
}

fn bench_matrix_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_chain_cost");
    let mut rng = StdRng::seed_from_u64(42);

    for &matrices in &[10usize, 50, 200] {
        let dims: Vec<u64> = (0..=matrices).map(|_| rng.gen_range(1..=100)).collect();

        group.bench_with_input(BenchmarkId::from_parameter(matrices), &matrices, |b, _| {
            b.iter(|| matrix_chain_cost(black_box(&dims)))
        });
    }
    group.finish();
}

fn bench_coin_change(c: &mut Criterion) {
    let mut group = c.benchmark_group("min_coins_for_change");
    let coins = [1usize, 5, 10, 25, 50, 100];

    for &amount in &[100usize, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(amount), &amount, |b, &amount| {
            b.iter(|| min_coins_for_change(black_box(&coins), amount))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_fibonacci,
    bench_knapsack,
    bench_lcs,
    bench_matrix_chain,
    bench_coin_change
);
criterion_main!(benches);
