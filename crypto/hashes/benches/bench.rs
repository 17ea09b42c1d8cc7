use criterion::{black_box, criterion_group, criterion_main, Criterion};
use likr_hashes::{Hasher, Sha256d};

fn bench_sha256d(c: &mut Criterion) {
    let header = [0x42u8; 80];
    c.bench_function("sha256d-header", |b| b.iter(|| black_box(Sha256d::hash(black_box(header)))));

    let tx = vec![0x17u8; 200];
    c.bench_function("sha256d-coinbase", |b| b.iter(|| black_box(Sha256d::hash(black_box(&tx)))));
}

criterion_group!(benches, bench_sha256d);
criterion_main!(benches);
