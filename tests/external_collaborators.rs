use cramer_shoup::api::{CramerShoupErr, PrimeRange, PrimitiveRoots, RandomPrime};
use cramer_shoup::prelude::*;
use num_bigint::BigUint;
use rand::SeedableRng;

/// A prime source that never finds anything.
struct ExhaustedPrimes;

impl PrimeSource for ExhaustedPrimes {
    fn random_prime<R: RandomGen>(
        &self,
        range: &PrimeRange,
        _random: &mut R,
    ) -> Result<BigUint, CramerShoupErr> {
        Err(CramerShoupErr::NoPrimeInRange {
            low: range.low().clone(),
            high: range.high().clone(),
        })
    }
}

struct KnownPrime(u32);

impl PrimeSource for KnownPrime {
    fn random_prime<R: RandomGen>(
        &self,
        _range: &PrimeRange,
        _random: &mut R,
    ) -> Result<BigUint, CramerShoupErr> {
        Ok(BigUint::from(self.0))
    }
}

/// Refuses every modulus as if it were composite.
struct RefusingFinder;

impl GeneratorFinder for RefusingFinder {
    fn find_generators(&self, p: &BigUint) -> Result<Vec<BigUint>, CramerShoupErr> {
        Err(CramerShoupErr::NotPrime(p.clone()))
    }
}

/// Returns a fixed generator list, the way a caller with precomputed parameters would.
struct TableFinder(Vec<u32>);

impl GeneratorFinder for TableFinder {
    fn find_generators(&self, _p: &BigUint) -> Result<Vec<BigUint>, CramerShoupErr> {
        Ok(self.0.iter().map(|g| BigUint::from(*g)).collect())
    }
}

fn store(label: &str) -> FileKeyStore {
    FileKeyStore::new(std::env::temp_dir().join(format!(
        "cramer-shoup-collaborators-{}-{}",
        label,
        std::process::id()
    )))
}

fn random() -> RandomInts<rand_chacha::ChaChaRng> {
    RandomInts::new(rand_chacha::ChaChaRng::seed_from_u64(7))
}

#[test]
fn prime_source_error_is_returned_unchanged() {
    let store = store("no-prime");
    let config = KeyGenConfig::default().with_bounds(1_000, 2_000).unwrap();
    let result = CramerShoup::with_collaborators(
        &config,
        &ExhaustedPrimes,
        &PrimitiveRoots,
        Sha256,
        random(),
        &store,
    );
    assert!(matches!(
        result,
        Err(CramerShoupErr::NoPrimeInRange { low, high })
            if low == BigUint::from(1_000u32) && high == BigUint::from(2_000u32)
    ));
    assert!(!store.dir().exists());
}

#[test]
fn generator_finder_error_is_returned_unchanged() {
    let store = store("no-generators");
    let result = CramerShoup::with_collaborators(
        &KeyGenConfig::default(),
        &RandomPrime,
        &RefusingFinder,
        Sha256,
        random(),
        &store,
    );
    assert!(matches!(result, Err(CramerShoupErr::NotPrime(_))));
    assert!(!store.dir().exists());
}

#[test]
fn external_collaborators_produce_a_working_scheme() {
    let store = store("table");
    let mut scheme = CramerShoup::with_collaborators(
        &KeyGenConfig::default(),
        &KnownPrime(11),
        &TableFinder(vec![2, 6, 7, 8]),
        Sha256,
        random(),
        &store,
    )
    .unwrap();
    assert_eq!(scheme.public_key().p(), &BigUint::from(11u32));
    assert_ne!(scheme.public_key().g1(), scheme.public_key().g2());

    let ciphertext = scheme.cipher(&BigUint::from(5u32)).unwrap();
    assert_eq!(scheme.decipher(&ciphertext).unwrap(), BigUint::from(5u32));
    std::fs::remove_dir_all(store.dir()).unwrap();
}

#[test]
fn empty_prime_range_is_public_error() {
    assert!(matches!(
        PrimeRange::new(BigUint::from(9u32), BigUint::from(3u32)),
        Err(CramerShoupErr::InvalidPrimeRange { .. })
    ));
}
