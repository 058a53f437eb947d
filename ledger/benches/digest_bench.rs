// Digest and validation benchmarks for the Strata ledger.
//
// Covers single-block digest computation, append throughput, and
// whole-chain validation at various chain lengths.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::json;

use strata_ledger::{Block, Chain};

fn build_chain(blocks: u64) -> Chain {
    let mut chain = Chain::new();
    for amount in 0..blocks {
        chain.append(Block::new(json!({"amount": amount})).expect("serializable payload"));
    }
    chain
}

fn bench_compute_digest(c: &mut Criterion) {
    let block = Block::new(json!({"amount": 10, "memo": "coffee"})).unwrap();

    c.bench_function("block/compute_digest", |b| {
        b.iter(|| block.compute_digest());
    });
}

fn bench_block_construction(c: &mut Criterion) {
    c.bench_function("block/new", |b| {
        b.iter(|| Block::new(json!({"amount": 10})).unwrap());
    });
}

fn bench_append(c: &mut Criterion) {
    c.bench_function("chain/append", |b| {
        b.iter_batched(
            || (build_chain(0), Block::new(json!({"amount": 10})).unwrap()),
            |(mut chain, block)| {
                chain.append(block);
                chain
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain/validate");

    for &length in &[16u64, 256, 4096] {
        let chain = build_chain(length);
        group.throughput(Throughput::Elements(length));
        group.bench_with_input(BenchmarkId::from_parameter(length), &chain, |b, chain| {
            b.iter(|| chain.validate());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compute_digest,
    bench_block_construction,
    bench_append,
    bench_validate,
);
criterion_main!(benches);
