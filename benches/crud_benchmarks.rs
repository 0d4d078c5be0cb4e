use bst_walk::{BstSet, InOrder, PostOrder, PreOrder};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::BTreeSet;

const N: usize = 10_000;

/// Sorted input degenerates the tree into a list, so keep it small.
const N_ORDERED: usize = 1_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

// ─── Insert ─────────────────────────────────────────────────────────────────

fn bench_insert_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("set_insert_random");

    group.bench_function(BenchmarkId::new("BstSet", N), |b| {
        b.iter(|| {
            let mut set: BstSet<i64> = BstSet::new();
            for &k in &keys {
                set.insert(k);
            }
            set
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for &k in &keys {
                set.insert(k);
            }
            set
        });
    });

    group.finish();
}

fn bench_insert_ordered(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_insert_ordered");

    group.bench_function(BenchmarkId::new("BstSet", N_ORDERED), |b| {
        b.iter(|| {
            let mut set: BstSet<i64> = BstSet::new();
            for k in 0..N_ORDERED as i64 {
                set.insert(k);
            }
            set
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N_ORDERED), |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for k in 0..N_ORDERED as i64 {
                set.insert(k);
            }
            set
        });
    });

    group.finish();
}

// ─── Lookup ─────────────────────────────────────────────────────────────────

fn bench_contains_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let bst: BstSet<i64> = keys.iter().copied().collect();
    let bt: BTreeSet<i64> = keys.iter().copied().collect();

    let mut group = c.benchmark_group("set_contains_random");

    group.bench_function(BenchmarkId::new("BstSet", N), |b| {
        b.iter(|| keys.iter().filter(|k| bst.contains(*k)).count());
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| keys.iter().filter(|k| bt.contains(*k)).count());
    });

    group.finish();
}

fn bench_lower_bound_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let bst: BstSet<i64> = keys.iter().copied().collect();
    let bt: BTreeSet<i64> = keys.iter().copied().collect();
    let probes: Vec<i64> = keys.iter().map(|k| k + 1).collect();

    let mut group = c.benchmark_group("set_lower_bound_random");

    group.bench_function(BenchmarkId::new("BstSet", N), |b| {
        b.iter(|| probes.iter().filter_map(|p| bst.lower_bound(p).current()).sum::<i64>());
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| probes.iter().filter_map(|p| bt.range(p..).next()).sum::<i64>());
    });

    group.finish();
}

// ─── Erase ──────────────────────────────────────────────────────────────────

fn bench_erase_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let bst: BstSet<i64> = keys.iter().copied().collect();
    let bt: BTreeSet<i64> = keys.iter().copied().collect();

    let mut group = c.benchmark_group("set_erase_random");

    group.bench_function(BenchmarkId::new("BstSet", N), |b| {
        b.iter_batched(
            || bst.clone(),
            |mut set| {
                for k in &keys {
                    set.erase(k);
                }
                set
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter_batched(
            || bt.clone(),
            |mut set| {
                for k in &keys {
                    set.remove(k);
                }
                set
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.finish();
}

// ─── Traversal ──────────────────────────────────────────────────────────────

fn bench_walk_each_order(c: &mut Criterion) {
    let keys = random_keys(N);
    let in_order: BstSet<i64, InOrder> = keys.iter().copied().collect();
    let pre_order: BstSet<i64, PreOrder> = keys.iter().copied().collect();
    let post_order: BstSet<i64, PostOrder> = keys.iter().copied().collect();
    let bt: BTreeSet<i64> = keys.iter().copied().collect();

    let mut group = c.benchmark_group("set_walk");

    group.bench_function(BenchmarkId::new("BstSet/in", N), |b| {
        b.iter(|| in_order.iter().sum::<i64>());
    });
    group.bench_function(BenchmarkId::new("BstSet/pre", N), |b| {
        b.iter(|| pre_order.iter().sum::<i64>());
    });
    group.bench_function(BenchmarkId::new("BstSet/post", N), |b| {
        b.iter(|| post_order.iter().sum::<i64>());
    });
    group.bench_function(BenchmarkId::new("BstSet/post-rev", N), |b| {
        b.iter(|| post_order.iter().rev().sum::<i64>());
    });
    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| bt.iter().sum::<i64>());
    });

    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let keys = random_keys(N);
    let bst: BstSet<i64, PreOrder> = keys.iter().copied().collect();
    let bt: BTreeSet<i64> = keys.iter().copied().collect();

    let mut group = c.benchmark_group("set_clone");

    group.bench_function(BenchmarkId::new("BstSet", N), |b| {
        b.iter(|| bst.clone());
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| bt.clone());
    });

    group.finish();
}

criterion_group!(insert_benches, bench_insert_random, bench_insert_ordered,);

criterion_group!(lookup_benches, bench_contains_random, bench_lower_bound_random,);

criterion_group!(erase_benches, bench_erase_random,);

criterion_group!(walk_benches, bench_walk_each_order, bench_clone,);

criterion_main!(insert_benches, lookup_benches, erase_benches, walk_benches);
