use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use tst::Map;

const SIZES: [usize; 2] = [100, 10_000];

fn rng() -> StdRng { StdRng::seed_from_u64(0x7357) }

/// Random lowercase keys of 3 to 12 characters.
fn rand_keys(n: usize) -> Vec<String> {
    let mut rng = rng();

    (0..n).map(|_| {
        let len = rng.gen_range(3..13);
        (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
    }).collect()
}

/// Zero-padded decimal keys, which share long prefixes.
fn seq_keys(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("key{:08}", i)).collect()
}

fn map_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_insert");

    for &n in &SIZES {
        let rand = rand_keys(n);
        let seq = seq_keys(n);

        group.bench_with_input(BenchmarkId::new("rand", n), &rand, |b, keys| {
            b.iter(|| {
                let mut map = Map::new();
                for (i, key) in keys.iter().enumerate() { map.insert(key, i); }
                black_box(map);
            });
        });

        group.bench_with_input(BenchmarkId::new("seq", n), &seq, |b, keys| {
            b.iter(|| {
                let mut map = Map::new();
                for (i, key) in keys.iter().enumerate() { map.insert(key, i); }
                black_box(map);
            });
        });

        group.bench_with_input(BenchmarkId::new("btree_rand", n), &rand, |b, keys| {
            b.iter(|| {
                let mut map = BTreeMap::new();
                for (i, key) in keys.iter().enumerate() { map.insert(key.as_str(), i); }
                black_box(map);
            });
        });
    }

    group.finish();
}

fn map_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_find");

    for &n in &SIZES {
        let mut keys = rand_keys(n);
        let map: Map<usize> = keys.iter().enumerate().map(|(i, key)| (key, i)).collect();
        keys.shuffle(&mut rng());

        group.bench_with_input(BenchmarkId::new("rand", n), &keys, |b, keys| {
            let mut i = 0;
            b.iter(|| {
                let value = map.get(&keys[i]);
                i = (i + 1) % keys.len();
                black_box(value);
            });
        });

        let keys = seq_keys(n);
        let map: Map<usize> = keys.iter().enumerate().map(|(i, key)| (key, i)).collect();

        group.bench_with_input(BenchmarkId::new("seq", n), &keys, |b, keys| {
            let mut i = 0;
            b.iter(|| {
                let value = map.get(&keys[i]);
                i = (i + 1) % keys.len();
                black_box(value);
            });
        });
    }

    group.finish();
}

fn map_remove_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_remove_insert");

    for &n in &SIZES {
        let keys = rand_keys(n);
        let mut map: Map<usize> = keys.iter().enumerate().map(|(i, key)| (key, i)).collect();

        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            let mut i = 0;
            b.iter(|| {
                let value = map.remove(&keys[i]);
                if let Some(value) = value { map.insert(&keys[i], value); }
                i = (i + 1) % keys.len();
            });
        });
    }

    group.finish();
}

fn map_iter(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_iter");

    for &n in &SIZES {
        let keys = rand_keys(n);
        let map: Map<usize> = keys.iter().enumerate().map(|(i, key)| (key, i)).collect();

        group.bench_function(BenchmarkId::new("full", n), |b| {
            b.iter(|| for entry in map.iter() { black_box(entry); });
        });

        group.bench_function(BenchmarkId::new("prefix", n), |b| {
            b.iter(|| for entry in map.prefix_iter("ab") { black_box(entry); });
        });

        group.bench_function(BenchmarkId::new("wildcard", n), |b| {
            b.iter(|| for entry in map.wildcard_iter("a.c.") { black_box(entry); });
        });

        group.bench_function(BenchmarkId::new("longest_prefix", n), |b| {
            b.iter(|| black_box(map.longest_prefix("abcdefghijklmnop")));
        });
    }

    group.finish();
}

criterion_group!(benches, map_insert, map_find, map_remove_insert, map_iter);
criterion_main!(benches);
