//! Benchmarks for insertion throughput and codec cost.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use digestset::DigestSet;

/// Insertion throughput across algorithms and element sizes
fn benchmark_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_throughput");

    let sizes = [64usize, 1024, 65_536];
    for size in &sizes {
        group.throughput(Throughput::Bytes(*size as u64));
        let data = vec![0u8; *size];

        for algorithm_id in ["sha256", "sha512", "blake3"] {
            group.bench_with_input(BenchmarkId::new(algorithm_id, size), &data, |b, data| {
                let mut set = DigestSet::new(algorithm_id).expect("registered algorithm");
                b.iter(|| {
                    set.insert(std::hint::black_box(data));
                });
            });
        }
    }
    group.finish();
}

/// Codec cost over a set with 1000 digests
fn benchmark_codecs(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    let mut set = DigestSet::new("sha256").expect("registered algorithm");
    for i in 0u32..1_000 {
        set.insert(i.to_le_bytes());
    }

    group.bench_function("to_bytes_1k", |b| {
        b.iter(|| std::hint::black_box(set.to_bytes()));
    });

    let bytes = set.to_bytes();
    group.bench_function("from_bytes_1k", |b| {
        b.iter(|| DigestSet::from_bytes(std::hint::black_box(&bytes)).expect("valid payload"));
    });

    group.bench_function("to_document_1k", |b| {
        b.iter(|| std::hint::black_box(set.to_document()));
    });

    group.finish();
}

criterion_group!(benches, benchmark_insert, benchmark_codecs);
criterion_main!(benches);
