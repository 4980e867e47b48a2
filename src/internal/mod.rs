use crate::api::{Ciphertext, KeyPair, PrivateKey, PublicKey};
use crate::api_common::{CramerShoupErr, Result};
use crate::internal::generators::GeneratorFinder;
use crate::internal::primes::{PrimeRange, PrimeSource};
use crate::internal::rand_ints::RandomGen;
use crate::internal::sha256::HexHashing;
use log::{debug, warn};
use num_bigint::BigUint;
use num_traits::One;

pub mod generators;
pub mod hashable;
pub mod primes;
pub mod rand_ints;
pub mod sha256;

pub type ByteVector = Vec<u8>;
pub type ErrorOr<T> = std::result::Result<T, InternalError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalError {
    MalformedDigest(String),
    MessageOutOfRange(BigUint),
    CiphertextOutOfRange(BigUint),
    VerificationFailed,
}

/// Generate a fresh key pair.
///
/// # Arguments
/// `range`         - interval the modulus `p` is drawn from
/// `primes`        - PrimeSource instance
/// `generators`    - GeneratorFinder instance
/// `random`        - source of uniform integers
///
/// # Return
/// The key pair, or an error if the range holds no prime or `p` has fewer than two generators.
/// Failures reported by `primes` or `generators` are passed through unchanged.
pub fn key_generation<P, G, R>(
    range: &PrimeRange,
    primes: &P,
    generators: &G,
    random: &mut R,
) -> Result<KeyPair>
where
    P: PrimeSource,
    G: GeneratorFinder,
    R: RandomGen,
{
    let p = primes.random_prime(range, random)?;
    let mut group_generators = generators.find_generators(&p)?;
    group_generators.sort();
    group_generators.dedup();
    let count = group_generators.len();
    if count < 2 {
        return Err(CramerShoupErr::TooFewGenerators { p, count });
    }

    let g1 = group_generators[random.random_index(count)].clone();
    let mut g2 = g1.clone();
    while g2 == g1 {
        g2 = group_generators[random.random_index(count)].clone();
    }

    let private_key = PrivateKey {
        x1: random.random_below(&p),
        x2: random.random_below(&p),
        y1: random.random_below(&p),
        y2: random.random_below(&p),
        w: random.random_below(&p),
    };
    let public_key = public_keygen(p, g1, g2, &private_key);
    debug!(
        "generated key pair over p = {} ({} generators available)",
        public_key.p, count
    );
    Ok(KeyPair {
        public_key,
        private_key,
    })
}

/// Derive `X = g1^x1 * g2^x2`, `Y = g1^y1 * g2^y2` and `W = g1^w`, all mod `p`.
pub fn public_keygen(p: BigUint, g1: BigUint, g2: BigUint, private_key: &PrivateKey) -> PublicKey {
    let x = (g1.modpow(&private_key.x1, &p) * g2.modpow(&private_key.x2, &p)) % &p;
    let y = (g1.modpow(&private_key.y1, &p) * g2.modpow(&private_key.y2, &p)) % &p;
    let w = g1.modpow(&private_key.w, &p);
    PublicKey {
        p,
        g1,
        g2,
        x,
        y,
        w,
    }
}

/// Hash `b1 || b2 || c` (decimal, unseparated), read the hex digest as an integer and reduce mod `p`.
pub fn challenge<H: HexHashing>(
    b1: &BigUint,
    b2: &BigUint,
    c: &BigUint,
    p: &BigUint,
    hash: &H,
) -> ErrorOr<BigUint> {
    let digest = hash.hash(&(b1, b2, c));
    BigUint::parse_bytes(digest.as_bytes(), 16)
        .map(|n| n % p)
        .ok_or(InternalError::MalformedDigest(digest))
}

/// Encrypt `message` to `public_key` using the ephemeral scalar `b`.
///
/// # Arguments
/// `public_key`    - `(p, g1, g2, X, Y, W)` of the recipient
/// `message`       - integer in `[0, p)`
/// `b`             - fresh random scalar in `[0, p)`
/// `hash`          - HexHashing instance used for the challenge
///
/// # Return
/// `(b1, b2, c, v)` where `c` masks the message with `W^b` and `v` binds `b` and the challenge
/// to `X` and `Y`.
pub fn encrypt<H: HexHashing>(
    public_key: &PublicKey,
    message: &BigUint,
    b: &BigUint,
    hash: &H,
) -> ErrorOr<Ciphertext> {
    let p = &public_key.p;
    if message >= p {
        return Err(InternalError::MessageOutOfRange(p.clone()));
    }
    let b1 = public_key.g1.modpow(b, p);
    let b2 = public_key.g2.modpow(b, p);
    let c = (public_key.w.modpow(b, p) * message) % p;
    let beta = challenge(&b1, &b2, &c, p, hash)?;
    let v = (public_key.x.modpow(b, p) * public_key.y.modpow(&(b * &beta), p)) % p;
    Ok(Ciphertext { b1, b2, c, v })
}

/// Verify and decrypt `ciphertext`.
///
/// The integrity tag is recomputed from the private scalars and compared before anything
/// about the plaintext is computed. The mask is removed with `b1^(p-1-w)`, which equals
/// `(W^b)^-1` by Fermat's little theorem.
pub fn decrypt<H: HexHashing>(
    public_key: &PublicKey,
    private_key: &PrivateKey,
    ciphertext: &Ciphertext,
    hash: &H,
) -> ErrorOr<BigUint> {
    let p = &public_key.p;
    let Ciphertext { b1, b2, c, v } = ciphertext;
    if [b1, b2, c, v].iter().any(|component| *component >= p) {
        return Err(InternalError::CiphertextOutOfRange(p.clone()));
    }

    let beta = challenge(b1, b2, c, p, hash)?;
    let masked = (b1.modpow(&private_key.x1, p) * b2.modpow(&private_key.x2, p)) % p;
    let bound = (b1.modpow(&private_key.y1, p) * b2.modpow(&private_key.y2, p)) % p;
    let expected_v = (masked * bound.modpow(&beta, p)) % p;
    if *v != expected_v {
        warn!("rejecting ciphertext: integrity tag does not verify");
        return Err(InternalError::VerificationFailed);
    }

    let unmask_exponent = p - BigUint::one() - &private_key.w;
    Ok((b1.modpow(&unmask_exponent, p) * c) % p)
}
