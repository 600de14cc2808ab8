use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use string_trie::Trie;

fn random_keys(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(3..12);
            (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
        })
        .collect()
}

fn build(keys: &[String]) -> Trie<usize> {
    let mut trie = Trie::new();
    for (i, key) in keys.iter().enumerate() {
        trie.insert(key, i).unwrap();
    }
    trie
}

fn bench_insert(c: &mut Criterion) {
    let keys = random_keys(10_000);
    c.bench_function("insert 10k", |b| b.iter(|| build(black_box(&keys))));
}

fn bench_lookup(c: &mut Criterion) {
    let keys = random_keys(10_000);
    let trie = build(&keys);
    c.bench_function("lookup 10k", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(trie.get(key));
            }
        })
    });
}

fn bench_delete(c: &mut Criterion) {
    let keys = random_keys(10_000);
    let trie = build(&keys);
    c.bench_function("delete 10k", |b| {
        b.iter_batched(
            || trie.clone(),
            |mut trie| {
                for key in &keys {
                    black_box(trie.delete(key).unwrap());
                }
                trie
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_prefix_queries(c: &mut Criterion) {
    let keys = random_keys(10_000);
    let trie = build(&keys);
    c.bench_function("keys_with_prefix", |b| {
        b.iter(|| black_box(trie.keys_with_prefix(black_box("ab"))))
    });
    c.bench_function("longest_prefix_of", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(trie.longest_prefix_of(key));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_insert,
    bench_lookup,
    bench_delete,
    bench_prefix_queries
);
criterion_main!(benches);
