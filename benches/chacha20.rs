//! Benchmarks for the ChaCha20 stream cipher
//!
//! Measures keystream setup cost and throughput for a range of message
//! sizes, for both the one-shot transform and the incremental cipher.

use chacha20_stream::{transform, ChaCha20, CHACHA20_KEY_SIZE, CHACHA20_NONCE_SIZE};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Benchmark cipher setup (state initialization)
fn bench_chacha20_setup(c: &mut Criterion) {
    let mut group = c.benchmark_group("chacha20_setup");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    group.bench_function("with_counter", |b| {
        let mut key = [0u8; CHACHA20_KEY_SIZE];
        let mut nonce = [0u8; CHACHA20_NONCE_SIZE];
        rng.fill(&mut key);
        rng.fill(&mut nonce);

        b.iter(|| {
            let cipher = ChaCha20::with_counter(black_box(&key), black_box(&nonce), 1).unwrap();
            black_box(cipher);
        });
    });

    group.finish();
}

/// Benchmark the one-shot transform for various message sizes
fn bench_chacha20_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("chacha20_transform");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let mut key = [0u8; CHACHA20_KEY_SIZE];
    let mut nonce = [0u8; CHACHA20_NONCE_SIZE];
    rng.fill(&mut key);
    rng.fill(&mut nonce);

    let sizes = [64, 256, 1024, 4096, 16384, 65536];

    for size in &sizes {
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let mut plaintext = vec![0u8; size];
            rng.fill(&mut plaintext[..]);

            b.iter(|| {
                let ciphertext =
                    transform(black_box(&key), black_box(&nonce), 1, black_box(&plaintext))
                        .unwrap();
                black_box(ciphertext);
            });
        });
    }

    group.finish();
}

/// Benchmark in-place processing with the incremental cipher
fn bench_chacha20_process(c: &mut Criterion) {
    let mut group = c.benchmark_group("chacha20_process");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let mut key = [0u8; CHACHA20_KEY_SIZE];
    let mut nonce = [0u8; CHACHA20_NONCE_SIZE];
    rng.fill(&mut key);
    rng.fill(&mut nonce);

    let sizes = [1024, 16384, 65536];

    for size in &sizes {
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let mut buffer = vec![0u8; size];
            rng.fill(&mut buffer[..]);

            b.iter(|| {
                let mut cipher = ChaCha20::with_counter(&key, &nonce, 1).unwrap();
                cipher.process(black_box(&mut buffer));
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_chacha20_setup,
    bench_chacha20_transform,
    bench_chacha20_process
);
criterion_main!(benches);
