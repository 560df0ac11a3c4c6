use criterion::{black_box, criterion_group, criterion_main, Criterion};
use eda_stats::{quantile_sorted, welch_t_test, NumericSummary};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

fn normal_sample(n: usize, mean: f64, std: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(mean, std).unwrap();
    (0..n).map(|_| dist.sample(&mut rng)).collect()
}

fn bench_quantile(c: &mut Criterion) {
    let mut data = normal_sample(10_000, 0.0, 1.0, 42);
    data.sort_by(|a, b| a.partial_cmp(b).unwrap());

    c.bench_function("quantile_sorted_10k", |b| {
        b.iter(|| quantile_sorted(black_box(&data), black_box(0.25)).unwrap())
    });
}

fn bench_summary(c: &mut Criterion) {
    let data = normal_sample(10_000, 100.0, 15.0, 7);

    c.bench_function("numeric_summary_10k", |b| {
        b.iter(|| NumericSummary::from_sample(black_box(&data)).unwrap())
    });
}

fn bench_welch(c: &mut Criterion) {
    let group1 = normal_sample(5_000, 0.0, 1.0, 1);
    let group2 = normal_sample(5_000, 0.2, 1.5, 2);

    c.bench_function("welch_t_test_5k", |b| {
        b.iter(|| welch_t_test(black_box(&group1), black_box(&group2)).unwrap())
    });
}

criterion_group!(benches, bench_quantile, bench_summary, bench_welch);
criterion_main!(benches);
