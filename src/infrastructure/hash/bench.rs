use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

// Import the hash functions from the main crate
use dhtable::infrastructure::hash::{polynomial_hash, ProbeSequence};
use dhtable::types::{DEFAULT_CAPACITY, HT_PRIME_1, HT_PRIME_2};

// Generate a random string of specified length
fn generate_random_string(length: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::thread_rng();
    let mut s = String::with_capacity(length);

    for _ in 0..length {
        let idx = rng.gen_range(0..CHARSET.len());
        s.push(CHARSET[idx] as char);
    }

    s
}

// Benchmark the polynomial hash over strings of increasing length
pub fn bench_polynomial_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("PolynomialHash");

    for (name, length) in [("short", 10), ("medium", 100), ("long", 1000)] {
        let s = generate_random_string(length);
        group.bench_function(name, |b: &mut criterion::Bencher| {
            b.iter(|| polynomial_hash(black_box(&s), HT_PRIME_1, DEFAULT_CAPACITY as u64))
        });
    }

    group.finish();
}

// Benchmark walking a full probe sequence
pub fn bench_probe_sequence(c: &mut Criterion) {
    let s = generate_random_string(16);

    let mut group = c.benchmark_group("ProbeSequence");

    group.bench_function("first_probe", |b: &mut criterion::Bencher| {
        b.iter(|| {
            ProbeSequence::new(black_box(&s), DEFAULT_CAPACITY as u64, HT_PRIME_1, HT_PRIME_2).next()
        })
    });

    group.bench_function("full_walk", |b: &mut criterion::Bencher| {
        b.iter(|| {
            ProbeSequence::new(black_box(&s), DEFAULT_CAPACITY as u64, HT_PRIME_1, HT_PRIME_2).sum::<usize>()
        })
    });

    group.finish();
}

// Benchmark hashing formatted keys
pub fn bench_formatted_strings(c: &mut Criterion) {
    let count = 1000;

    let mut group = c.benchmark_group("FormattedStrings");

    group.bench_function("polynomial_hash", |b: &mut criterion::Bencher| b.iter(|| {
        let mut rng = rand::thread_rng();
        for _ in 0..count {
            let file_id = rng.gen_range(0..u16::MAX);
            let block_id = rng.gen_range(0..u32::MAX);
            let s = format!("{}-{}", file_id, block_id);
            polynomial_hash(&s, HT_PRIME_1, DEFAULT_CAPACITY as u64);
        }
    }));

    group.finish();
}

// Export the benchmark group for criterion
criterion_group!(benches, bench_polynomial_hash, bench_probe_sequence, bench_formatted_strings);

// Only run the benchmark group when this file is executed directly
criterion_main!(benches);
