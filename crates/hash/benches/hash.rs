// Copyright 2025 Irreducible Inc.

use blake_hash::{Blake224, Blake256};
use blake_utils::{env::boolean_env_flag_set, tracing::init_tracing};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use digest::Digest;
use rand::{thread_rng, RngCore};

fn bench_blake(c: &mut Criterion) {
	if boolean_env_flag_set("BLAKE_BENCH_TRACE") {
		init_tracing();
	}

	let mut group = c.benchmark_group("BLAKE");
	let mut rng = thread_rng();

	for n in [64, 4096, 1 << 16] {
		let mut data = vec![0u8; n];
		rng.fill_bytes(&mut data);
		group.throughput(Throughput::Bytes(n as u64));

		group.bench_with_input(BenchmarkId::new("BLAKE-256", n), &data, |bench, data| {
			bench.iter(|| <Blake256 as Digest>::digest(data))
		});
		group.bench_with_input(BenchmarkId::new("BLAKE-224", n), &data, |bench, data| {
			bench.iter(|| <Blake224 as Digest>::digest(data))
		});
	}

	group.finish()
}

fn bench_reuse(c: &mut Criterion) {
	let mut group = c.benchmark_group("BLAKE-256 reuse");

	// Write, sum and reset a single state, as a long-lived checksum would.
	let data = [0u8; 4096];
	group.throughput(Throughput::Bytes(data.len() as u64));
	group.bench_function("write-sum-reset", |bench| {
		let mut hasher = Blake256::new();
		bench.iter(|| {
			hasher.write(data);
			let out = hasher.sum();
			hasher.reset();
			out
		})
	});

	group.finish()
}

criterion_group!(hash, bench_blake, bench_reuse);
criterion_main!(hash);
