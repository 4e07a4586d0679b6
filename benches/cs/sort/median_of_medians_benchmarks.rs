use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use momselect::{median, select};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];

fn random_data(n: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(1..=10_000)).collect()
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_middle_rank");

    for &size in &SIZES {
        let data = random_data(size, 42);
        let k = size / 2;

        group.bench_with_input(BenchmarkId::new("median_of_medians", size), &data, |b, data| {
            b.iter(|| select(black_box(data), black_box(k)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("full_sort", size), &data, |b, data| {
            b.iter(|| {
                let mut v = black_box(data).clone();
                v.sort_unstable();
                v[k]
            })
        });

        group.bench_with_input(
            BenchmarkId::new("select_nth_unstable", size),
            &data,
            |b, data| {
                b.iter(|| {
                    let mut v = black_box(data).clone();
                    *v.select_nth_unstable(k).1
                })
            },
        );
    }

    group.finish();
}

fn bench_sorted_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_sorted_input");

    for &size in &SIZES {
        let data: Vec<i64> = (0..size as i64).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| select(black_box(data), black_box(size / 2)).unwrap())
        });
    }

    group.finish();
}

fn bench_median(c: &mut Criterion) {
    let mut group = c.benchmark_group("median");

    for &size in &[1_001usize, 1_000] {
        let data = random_data(size, 7);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| median(black_box(data)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_select, bench_sorted_input, bench_median);
criterion_main!(benches);
