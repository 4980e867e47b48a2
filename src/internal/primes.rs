use crate::api_common::{CramerShoupErr, Result};
use crate::internal::rand_ints::RandomGen;
use num_bigint::BigUint;
use num_prime::nt_funcs::is_prime;
use num_prime::PrimalityTestConfig;
use num_traits::One;

/// Half-open interval `[low, high)` that primes are drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeRange {
    low: BigUint,
    high: BigUint,
}

impl PrimeRange {
    pub const DEFAULT_LOW: u32 = 100;
    pub const DEFAULT_HIGH: u32 = 500;

    pub fn new(low: BigUint, high: BigUint) -> Result<PrimeRange> {
        if low >= high {
            Err(CramerShoupErr::InvalidPrimeRange { low, high })
        } else {
            Ok(PrimeRange { low, high })
        }
    }

    pub fn low(&self) -> &BigUint {
        &self.low
    }

    pub fn high(&self) -> &BigUint {
        &self.high
    }

    /// Number of integers in the range.
    pub fn width(&self) -> BigUint {
        &self.high - &self.low
    }

    pub fn contains(&self, n: &BigUint) -> bool {
        n >= &self.low && n < &self.high
    }
}

impl Default for PrimeRange {
    fn default() -> Self {
        PrimeRange {
            low: BigUint::from(PrimeRange::DEFAULT_LOW),
            high: BigUint::from(PrimeRange::DEFAULT_HIGH),
        }
    }
}

/// Source of the group modulus.
pub trait PrimeSource {
    /// Return a prime in `range`, or `CramerShoupErr::NoPrimeInRange` if there is none.
    fn random_prime<R: RandomGen>(&self, range: &PrimeRange, random: &mut R) -> Result<BigUint>;
}

/// Samples candidates uniformly from the range, falling back to a wrapping scan
/// from a random offset so that an empty range is detected rather than looped on.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPrime;

impl RandomPrime {
    const SAMPLE_ATTEMPTS: usize = 64;
}

pub(crate) fn is_probable_prime(n: &BigUint) -> bool {
    if *n < BigUint::from(2u32) {
        return false;
    }
    is_prime(n, Some(PrimalityTestConfig::default())).probably()
}

impl PrimeSource for RandomPrime {
    fn random_prime<R: RandomGen>(&self, range: &PrimeRange, random: &mut R) -> Result<BigUint> {
        let width = range.width();
        for _ in 0..RandomPrime::SAMPLE_ATTEMPTS {
            let candidate = range.low() + random.random_below(&width);
            if is_probable_prime(&candidate) {
                return Ok(candidate);
            }
        }

        let start = range.low() + random.random_below(&width);
        let mut candidate = start.clone();
        loop {
            if is_probable_prime(&candidate) {
                return Ok(candidate);
            }
            candidate += BigUint::one();
            if candidate == *range.high() {
                candidate = range.low().clone();
            }
            if candidate == start {
                return Err(CramerShoupErr::NoPrimeInRange {
                    low: range.low().clone(),
                    high: range.high().clone(),
                });
            }
        }
    }
}
