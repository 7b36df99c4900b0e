//! Performance benchmarks for the digest service
//!
//! Measures the service overhead on top of raw SHA-1: engine handling in
//! both modes, salting, and iterated re-hashing.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use saltdigest_core::{DigestHasher, EngineMode, HasherConfig};
use std::hint::black_box;

fn hasher_for(mode: EngineMode) -> DigestHasher {
    DigestHasher::with_config(HasherConfig {
        engine_mode: mode,
        ..HasherConfig::default()
    })
    .unwrap()
}

/// Benchmark single-round hashing across input sizes and engine modes
fn benchmark_single_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_round");

    let sizes = vec![
        16,        // Short password
        1_024,     // 1KB
        65_536,    // 64KB
        1_048_576, // 1MB
    ];

    for mode in [EngineMode::PerCall, EngineMode::Shared] {
        let hasher = hasher_for(mode);

        for &size in &sizes {
            let data: Vec<u8> = (0..size).map(|i| (i % 256) as u8).collect();
            group.throughput(Throughput::Bytes(size as u64));

            group.bench_with_input(
                BenchmarkId::new(mode.to_string(), size),
                &data,
                |b, data| {
                    b.iter(|| black_box(hasher.hash_salted(black_box(data), Some(b"saltsalt"))));
                },
            );
        }
    }

    group.finish();
}

/// Benchmark key stretching cost as iterations grow
fn benchmark_iterations(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterations");
    let hasher = hasher_for(EngineMode::PerCall);

    for iterations in [1u32, 10, 100, 1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(iterations),
            &iterations,
            |b, &iterations| {
                b.iter(|| {
                    black_box(
                        hasher
                            .hash_iterated(b"correct horse battery staple", Some(b"salt"), iterations)
                            .unwrap(),
                    )
                });
            },
        );
    }

    group.finish();
}

/// Benchmark salt generation
fn benchmark_salt_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("salt_generation");
    let hasher = hasher_for(EngineMode::PerCall);

    for len in [8usize, 16, 32, 64] {
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter(|| black_box(hasher.generate_salt(len).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_round,
    benchmark_iterations,
    benchmark_salt_generation
);
criterion_main!(benches);
