use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use xor_merkle::{Blake3, MerkleTree, Sha256};

fn blocks(n: usize) -> Vec<Vec<u8>> {
    (0..n).map(|i| format!("block-{i:08}").into_bytes()).collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for n in [16usize, 1_000, 10_000] {
        let data = blocks(n);
        group.bench_with_input(BenchmarkId::new("sha256", n), &data, |b, data| {
            b.iter(|| MerkleTree::<Sha256>::build(black_box(data)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("blake3", n), &data, |b, data| {
            b.iter(|| MerkleTree::<Blake3>::build(black_box(data)).unwrap())
        });
    }
    group.finish();
}

fn bench_proof(c: &mut Criterion) {
    let data = blocks(10_000);
    let tree = MerkleTree::<Sha256>::build(&data).unwrap();
    c.bench_function("proof/10000", |b| b.iter(|| tree.proof(black_box(&data[4_242]))));
}

criterion_group!(benches, bench_build, bench_proof);
criterion_main!(benches);
