#[macro_use]
extern crate criterion;

use criterion::Criterion;
use cramer_shoup::prelude::*;
use num_bigint::BigUint;
use rand::SeedableRng;

fn bench_store(label: &str) -> FileKeyStore {
    FileKeyStore::new(std::env::temp_dir().join(format!("cramer-shoup-bench-{}", label)))
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("generate key pair (default range)", |b| {
        let store = bench_store("keygen");
        b.iter(|| CramerShoup::new(&store).unwrap());
    });
    c.bench_function("generate key pair [10000, 20000)", |b| {
        let store = bench_store("keygen-wide");
        let config = KeyGenConfig::default().with_bounds(10_000, 20_000).unwrap();
        b.iter(|| {
            CramerShoup::new_with_rand(&config, &store, rand_chacha::ChaChaRng::from_entropy())
                .unwrap()
        });
    });
    c.bench_function("cipher", |b| {
        let mut scheme = CramerShoup::new(&bench_store("cipher")).unwrap();
        let message = BigUint::from(42u32);
        b.iter(|| scheme.cipher(&message).unwrap());
    });
    c.bench_function("decipher", |b| {
        let mut scheme = CramerShoup::new(&bench_store("decipher")).unwrap();
        let ciphertext = scheme.cipher(&BigUint::from(42u32)).unwrap();
        b.iter(|| scheme.decipher(&ciphertext).unwrap());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
