use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use keysort::prelude::*;
use rand::Rng;
use std::hint::black_box;

fn bench_integer_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("Integer Keys");
    group.sample_size(10);

    // Dataset generation
    let mut rng = rand::rng();
    let count = 10_000;

    let records: Vec<(i64, u32)> = (0..count)
        .map(|i| (rng.random_range(-1_000..1_000), i))
        .collect();

    group.bench_function("keysort", |b| {
        b.iter(|| keysort(|r: &(i64, u32)| r.0, black_box(&records)))
    });

    group.bench_function("keysort_indices", |b| {
        b.iter(|| keysort_indices(|r: &(i64, u32)| r.0, black_box(&records)))
    });

    group.bench_function("keysort_mut", |b| {
        b.iter_batched(
            || records.clone(),
            |mut data| keysort_mut(|r: &(i64, u32)| r.0, black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    // Std Sort (Stable)
    group.bench_function("slice::sort_by_key (stable)", |b| {
        b.iter_batched(
            || records.clone(),
            |mut data| data.sort_by_key(|r| r.0),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_expensive_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("Case Insensitive Strings");
    group.sample_size(10);

    let mut rng = rand::rng();
    let count = 10_000;

    let words: Vec<String> = (0..count)
        .map(|_| {
            let len = rng.random_range(5..20);
            (0..len)
                .map(|_| {
                    let ch = rng.random_range(b'a'..=b'z') as char;
                    if rng.random_bool(0.5) {
                        ch.to_ascii_uppercase()
                    } else {
                        ch
                    }
                })
                .collect()
        })
        .collect();

    let by_lowercase = keysort_by(|w: &String| w.to_lowercase());

    group.bench_function("keysort", |b| {
        b.iter(|| by_lowercase.sort(black_box(&words)))
    });

    group.bench_function("keysort_cached", |b| {
        b.iter(|| by_lowercase.sort_cached(black_box(&words)))
    });

    group.bench_function("slice::sort_by_cached_key", |b| {
        b.iter_batched(
            || words.clone(),
            |mut data| data.sort_by_cached_key(|w| w.to_lowercase()),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_integer_keys, bench_expensive_keys);
criterion_main!(benches);
