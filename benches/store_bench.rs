//! Benchmarks for the anecdote store
//!
//! Run with: cargo bench

use anecdotes::store::{AnecdoteStore, NewAnecdote};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn create_store(count: usize) -> AnecdoteStore {
    let mut store = AnecdoteStore::new();
    for i in 0..count {
        store.add(NewAnecdote::new(
            format!("anecdote {}", i),
            "bench",
            "https://example.com",
        ));
    }
    store
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    for size in [100, 1000, 10000] {
        let store = create_store(size);
        let last = store.as_slice()[size - 1].id;

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("find_last_{}", size), |b| {
            b.iter(|| store.find_by_id(black_box(last)).is_some())
        });

        group.bench_function(format!("find_missing_{}", size), |b| {
            b.iter(|| store.find_by_id(black_box(u64::MAX - 1)).is_none())
        });
    }

    group.finish();
}

fn bench_mutations(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutations");

    for size in [100, 1000, 10000] {
        let base = create_store(size);

        group.bench_function(format!("add_{}", size), |b| {
            b.iter_batched(
                || base.clone(),
                |mut store| store.add(NewAnecdote::new("new", "bench", "")),
                criterion::BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("vote_middle_{}", size), |b| {
            let mut store = base.clone();
            let middle = store.as_slice()[size / 2].id;
            b.iter(|| store.vote(black_box(middle)).map(|a| a.votes))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lookup, bench_mutations);
criterion_main!(benches);
