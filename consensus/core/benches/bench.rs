use criterion::{Criterion, black_box, criterion_group, criterion_main};
use likr_consensus_core::config::{
    Registry,
    params::Params,
    seeds::{SeedSpec6, convert_seeds},
};
use likr_consensus_core::testutils::genesis::RecordedGenesisHasher;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::net::Ipv4Addr;

fn registry_benchmark(c: &mut Criterion) {
    c.bench_function("registry-build", |b| b.iter(|| black_box(Registry::new(&RecordedGenesisHasher))));
    c.bench_function("testnet-params-build", |b| b.iter(|| black_box(Params::testnet(black_box(&RecordedGenesisHasher)))));
}

fn seeds_benchmark(c: &mut Criterion) {
    let seeds = (0..256u32)
        .map(|i| SeedSpec6::new(Ipv4Addr::from(0xcb00_7100 + i).to_ipv6_mapped().octets(), 28882))
        .collect::<Vec<_>>();
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    c.bench_function("convert-seeds-256", |b| b.iter(|| black_box(convert_seeds(black_box(&seeds), 1_700_000_000, &mut rng))));
}

criterion_group!(benches, registry_benchmark, seeds_benchmark);
criterion_main!(benches);
