pub use crate::api_common::CramerShoupErr;
use crate::api_common::Result;
use crate::internal;
pub use crate::internal::generators::{GeneratorFinder, PrimitiveRoots};
pub use crate::internal::hashable::Hashable;
use crate::internal::primes::is_probable_prime;
pub use crate::internal::primes::{PrimeRange, PrimeSource, RandomPrime};
pub use crate::internal::rand_ints::{RandomGen, RandomInts};
pub use crate::internal::sha256::{HexHashing, Sha256};
pub use crate::internal::ByteVector;
use crate::keystore::{self, KeyStore};
use num_bigint::BigUint;
use std::fmt;

/// Cramer-Shoup public API
///
/// Owns one key pair for its whole lifetime. Key generation happens at construction and the
/// key pair is persisted before the instance is returned.
#[derive(Debug)]
pub struct CramerShoup<H, R> {
    random_ints: R,
    hash: H,
    key_pair: KeyPair,
}

impl CramerShoup<Sha256, RandomInts<rand::rngs::ThreadRng>> {
    /// Generate a key pair over the default prime range and persist it as `cramer_shoup.pub`
    /// and `cramer_shoup` in `store`.
    pub fn new<S: KeyStore>(store: &S) -> Result<Self> {
        CramerShoup::new_with_rand(&KeyGenConfig::default(), store, rand::thread_rng())
    }
}

impl<CR: rand::CryptoRng + rand::RngCore> CramerShoup<Sha256, RandomInts<CR>> {
    pub fn new_with_rand<S: KeyStore>(
        config: &KeyGenConfig,
        store: &S,
        r: CR,
    ) -> Result<CramerShoup<Sha256, RandomInts<CR>>> {
        CramerShoup::with_collaborators(
            config,
            &RandomPrime,
            &PrimitiveRoots,
            Sha256,
            RandomInts::new(r),
            store,
        )
    }
}

impl<H: HexHashing, R: RandomGen> CramerShoup<H, R> {
    /// Generate and persist a key pair using caller-supplied collaborators.
    ///
    /// # Arguments
    /// - `config`      - prime range and the scheme name the key records are stored under
    /// - `primes`      - source of the modulus `p`
    /// - `generators`  - enumerates the generators of (Z/pZ)*
    /// - `hash`        - hash function backing the ciphertext challenge
    /// - `random_ints` - randomness for key generation and every later encryption
    /// - `store`       - destination of the public and private key records
    pub fn with_collaborators<P: PrimeSource, G: GeneratorFinder, S: KeyStore>(
        config: &KeyGenConfig,
        primes: &P,
        generators: &G,
        hash: H,
        mut random_ints: R,
        store: &S,
    ) -> Result<Self> {
        let key_pair = internal::key_generation(
            config.prime_range(),
            primes,
            generators,
            &mut random_ints,
        )?;
        keystore::save_key_pair(store, config.scheme_name(), &key_pair)?;
        Ok(CramerShoup {
            random_ints,
            hash,
            key_pair,
        })
    }

    /// Wrap an existing key pair. Nothing is generated or persisted.
    pub fn from_key_pair(key_pair: KeyPair, hash: H, random_ints: R) -> Self {
        CramerShoup {
            random_ints,
            hash,
            key_pair,
        }
    }

    /// Rebuild a scheme from the records a previous instance persisted under `scheme_name`.
    pub fn load<S: KeyStore>(store: &S, scheme_name: &str, hash: H, random_ints: R) -> Result<Self> {
        let key_pair = keystore::load_key_pair(store, scheme_name)?;
        Ok(CramerShoup::from_key_pair(key_pair, hash, random_ints))
    }

    pub fn key_pair(&self) -> &KeyPair {
        &self.key_pair
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.key_pair.public_key
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.key_pair.private_key
    }
}

/// Key generation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyGenConfig {
    prime_range: PrimeRange,
    scheme_name: String,
}

impl KeyGenConfig {
    pub fn new(prime_range: PrimeRange, scheme_name: &str) -> Self {
        KeyGenConfig {
            prime_range,
            scheme_name: scheme_name.to_string(),
        }
    }

    pub fn with_prime_range(self, prime_range: PrimeRange) -> Self {
        KeyGenConfig {
            prime_range,
            ..self
        }
    }

    /// Draw the modulus from `[low, high)`.
    pub fn with_bounds(self, low: u64, high: u64) -> Result<Self> {
        let prime_range = PrimeRange::new(BigUint::from(low), BigUint::from(high))?;
        Ok(self.with_prime_range(prime_range))
    }

    pub fn with_scheme_name(self, scheme_name: &str) -> Self {
        KeyGenConfig {
            scheme_name: scheme_name.to_string(),
            ..self
        }
    }

    pub fn prime_range(&self) -> &PrimeRange {
        &self.prime_range
    }

    pub fn scheme_name(&self) -> &str {
        &self.scheme_name
    }
}

impl Default for KeyGenConfig {
    fn default() -> Self {
        KeyGenConfig::new(PrimeRange::default(), keystore::DEFAULT_SCHEME_NAME)
    }
}

/// `(p, g1, g2, X, Y, W)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub(crate) p: BigUint,
    pub(crate) g1: BigUint,
    pub(crate) g2: BigUint,
    pub(crate) x: BigUint,
    pub(crate) y: BigUint,
    pub(crate) w: BigUint,
}

impl PublicKey {
    pub const RECORD_LEN: usize = 6;

    /// Construct a public key from its components.
    ///
    /// `p` must be prime, `g1` and `g2` distinct, and every other component in `[1, p)`.
    pub fn new(
        p: BigUint,
        g1: BigUint,
        g2: BigUint,
        x: BigUint,
        y: BigUint,
        w: BigUint,
    ) -> Result<PublicKey> {
        if !is_probable_prime(&p) {
            return Err(CramerShoupErr::InvalidPublicKey("modulus is not prime"));
        }
        if g1 == g2 {
            return Err(CramerShoupErr::InvalidPublicKey("generators are equal"));
        }
        let zero = BigUint::default();
        if [&g1, &g2, &x, &y, &w]
            .iter()
            .any(|value| **value == zero || **value >= p)
        {
            return Err(CramerShoupErr::InvalidPublicKey(
                "component outside the multiplicative group",
            ));
        }
        Ok(PublicKey {
            p,
            g1,
            g2,
            x,
            y,
            w,
        })
    }

    pub fn p(&self) -> &BigUint {
        &self.p
    }
    pub fn g1(&self) -> &BigUint {
        &self.g1
    }
    pub fn g2(&self) -> &BigUint {
        &self.g2
    }
    /// `X = g1^x1 * g2^x2 mod p`
    pub fn x(&self) -> &BigUint {
        &self.x
    }
    /// `Y = g1^y1 * g2^y2 mod p`
    pub fn y(&self) -> &BigUint {
        &self.y
    }
    /// `W = g1^w mod p`
    pub fn w(&self) -> &BigUint {
        &self.w
    }

    /// The record layout: `[p, g1, g2, X, Y, W]`.
    pub fn to_record(&self) -> Vec<BigUint> {
        vec![
            self.p.clone(),
            self.g1.clone(),
            self.g2.clone(),
            self.x.clone(),
            self.y.clone(),
            self.w.clone(),
        ]
    }

    pub fn from_record(name: &str, values: &[BigUint]) -> Result<PublicKey> {
        keystore::check_record_len(name, values, PublicKey::RECORD_LEN)?;
        PublicKey::new(
            values[0].clone(),
            values[1].clone(),
            values[2].clone(),
            values[3].clone(),
            values[4].clone(),
            values[5].clone(),
        )
    }
}

/// `(x1, x2, y1, y2, w)`
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    pub(crate) x1: BigUint,
    pub(crate) x2: BigUint,
    pub(crate) y1: BigUint,
    pub(crate) y2: BigUint,
    pub(crate) w: BigUint,
}

impl PrivateKey {
    pub const RECORD_LEN: usize = 5;

    pub fn new(x1: BigUint, x2: BigUint, y1: BigUint, y2: BigUint, w: BigUint) -> PrivateKey {
        PrivateKey { x1, x2, y1, y2, w }
    }

    pub fn x1(&self) -> &BigUint {
        &self.x1
    }
    pub fn x2(&self) -> &BigUint {
        &self.x2
    }
    pub fn y1(&self) -> &BigUint {
        &self.y1
    }
    pub fn y2(&self) -> &BigUint {
        &self.y2
    }
    pub fn w(&self) -> &BigUint {
        &self.w
    }

    /// The record layout: `[x1, x2, y1, y2, w]`.
    pub fn to_record(&self) -> Vec<BigUint> {
        vec![
            self.x1.clone(),
            self.x2.clone(),
            self.y1.clone(),
            self.y2.clone(),
            self.w.clone(),
        ]
    }

    pub fn from_record(name: &str, values: &[BigUint]) -> Result<PrivateKey> {
        keystore::check_record_len(name, values, PrivateKey::RECORD_LEN)?;
        Ok(PrivateKey::new(
            values[0].clone(),
            values[1].clone(),
            values[2].clone(),
            values[3].clone(),
            values[4].clone(),
        ))
    }
}

// scalars stay out of logs and panic messages
impl fmt::Debug for PrivateKey {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.debug_struct("PrivateKey").finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub(crate) public_key: PublicKey,
    pub(crate) private_key: PrivateKey,
}

impl KeyPair {
    /// Pair `private_key` with `public_key`, checking that the public values derive from it.
    pub fn new(public_key: PublicKey, private_key: PrivateKey) -> Result<KeyPair> {
        let p = &public_key.p;
        if private_key.to_record().iter().any(|scalar| scalar >= p) {
            return Err(CramerShoupErr::InvalidKeyPair("scalar not below the modulus"));
        }
        let derived = internal::public_keygen(
            p.clone(),
            public_key.g1.clone(),
            public_key.g2.clone(),
            &private_key,
        );
        if derived != public_key {
            return Err(CramerShoupErr::InvalidKeyPair(
                "public values do not derive from the private scalars",
            ));
        }
        Ok(KeyPair {
            public_key,
            private_key,
        })
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }
}

/// `(b1, b2, c, v)`: the two randomizers, the masked message and the integrity tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ciphertext {
    pub(crate) b1: BigUint,
    pub(crate) b2: BigUint,
    pub(crate) c: BigUint,
    pub(crate) v: BigUint,
}

impl Ciphertext {
    pub fn new(b1: BigUint, b2: BigUint, c: BigUint, v: BigUint) -> Ciphertext {
        Ciphertext { b1, b2, c, v }
    }

    pub fn b1(&self) -> &BigUint {
        &self.b1
    }
    pub fn b2(&self) -> &BigUint {
        &self.b2
    }
    pub fn c(&self) -> &BigUint {
        &self.c
    }
    pub fn v(&self) -> &BigUint {
        &self.v
    }

    pub fn into_parts(self) -> (BigUint, BigUint, BigUint, BigUint) {
        (self.b1, self.b2, self.c, self.v)
    }
}

/// Encrypt, decrypt, and supporting operations.
pub trait CryptoOps {
    /// Encrypt `message` to this instance's public key.
    ///
    /// # Arguments
    /// - `message` - integer in `[0, p)`
    ///
    /// # Return
    /// A fresh ciphertext, or `MessageOutOfRange` if `message >= p`.
    fn cipher(&mut self, message: &BigUint) -> Result<Ciphertext>;

    /// Encrypt `message` to someone else's public key. Only the public key is used.
    fn cipher_to(&mut self, public_key: &PublicKey, message: &BigUint) -> Result<Ciphertext>;

    /// Verify and decrypt `ciphertext`.
    ///
    /// # Return
    /// The message, or `VerificationFailed` if the integrity tag does not match. No plaintext is
    /// produced for a ciphertext that fails verification.
    fn decipher(&self, ciphertext: &Ciphertext) -> Result<BigUint>;

    /// The challenge `beta` that binds `b1`, `b2` and `c`, reduced mod this instance's `p`.
    fn challenge(&self, b1: &BigUint, b2: &BigUint, c: &BigUint) -> Result<BigUint>;
}

impl<H: HexHashing, R: RandomGen> CryptoOps for CramerShoup<H, R> {
    fn cipher(&mut self, message: &BigUint) -> Result<Ciphertext> {
        let public_key = self.key_pair.public_key.clone();
        self.cipher_to(&public_key, message)
    }

    fn cipher_to(&mut self, public_key: &PublicKey, message: &BigUint) -> Result<Ciphertext> {
        let b = self.random_ints.random_below(&public_key.p);
        Ok(internal::encrypt(public_key, message, &b, &self.hash)?)
    }

    fn decipher(&self, ciphertext: &Ciphertext) -> Result<BigUint> {
        Ok(internal::decrypt(
            &self.key_pair.public_key,
            &self.key_pair.private_key,
            ciphertext,
            &self.hash,
        )?)
    }

    fn challenge(&self, b1: &BigUint, b2: &BigUint, c: &BigUint) -> Result<BigUint> {
        Ok(internal::challenge(
            b1,
            b2,
            c,
            &self.key_pair.public_key.p,
            &self.hash,
        )?)
    }
}
