use crate::api_common::{CramerShoupErr, Result};
use crate::internal::primes::is_probable_prime;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;

/// Enumerates the generators of the multiplicative group modulo a prime.
pub trait GeneratorFinder {
    /// All generators of (Z/pZ)*, in ascending order. Fails with `CramerShoupErr::NotPrime` if
    /// `p` is composite.
    fn find_generators(&self, p: &BigUint) -> Result<Vec<BigUint>>;
}

/// Tests every element of `[1, p-1]` against the prime factors of the group order.
///
/// This is linear in `p`, which suits the small moduli the default prime range produces.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimitiveRoots;

impl GeneratorFinder for PrimitiveRoots {
    fn find_generators(&self, p: &BigUint) -> Result<Vec<BigUint>> {
        if !is_probable_prime(p) {
            return Err(CramerShoupErr::NotPrime(p.clone()));
        }
        let order = p - BigUint::one();
        let factors = distinct_prime_factors(&order);

        let mut generators = Vec::new();
        let mut g = BigUint::one();
        while g < *p {
            if is_generator(&g, p, &order, &factors) {
                generators.push(g.clone());
            }
            g += 1u32;
        }
        Ok(generators)
    }
}

/// `g` generates (Z/pZ)* iff `g^(order/q) != 1` for every prime `q` dividing the order.
fn is_generator(g: &BigUint, p: &BigUint, order: &BigUint, factors: &[BigUint]) -> bool {
    factors
        .iter()
        .all(|q| !g.modpow(&(order / q), p).is_one())
}

/// Distinct prime factors of `n` by trial division, ascending.
fn distinct_prime_factors(n: &BigUint) -> Vec<BigUint> {
    let mut factors = Vec::new();
    let mut rest = n.clone();
    let mut d = BigUint::from(2u32);
    while &d * &d <= rest {
        if rest.is_multiple_of(&d) {
            while rest.is_multiple_of(&d) {
                rest /= &d;
            }
            factors.push(d.clone());
        }
        d += 1u32;
    }
    if rest > BigUint::one() {
        factors.push(rest);
    }
    factors
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn ints(values: &[u32]) -> Vec<BigUint> {
        values.iter().map(|v| BigUint::from(*v)).collect()
    }

    /// Brute force: g is a generator iff its powers cover the whole group.
    fn generates_group(g: u64, p: u64) -> bool {
        let mut seen = HashSet::new();
        let mut acc = 1u64;
        for _ in 0..(p - 1) {
            acc = acc * g % p;
            seen.insert(acc);
        }
        seen.len() as u64 == p - 1
    }

    #[test]
    fn generators_of_11() {
        let gens = PrimitiveRoots.find_generators(&BigUint::from(11u32)).unwrap();
        assert_eq!(gens, ints(&[2, 6, 7, 8]));
    }

    #[test]
    fn generators_of_small_primes() {
        assert_eq!(
            PrimitiveRoots.find_generators(&BigUint::from(2u32)).unwrap(),
            ints(&[1])
        );
        assert_eq!(
            PrimitiveRoots.find_generators(&BigUint::from(3u32)).unwrap(),
            ints(&[2])
        );
        assert_eq!(
            PrimitiveRoots.find_generators(&BigUint::from(5u32)).unwrap(),
            ints(&[2, 3])
        );
    }

    #[test]
    fn composite_rejected() {
        assert!(matches!(
            PrimitiveRoots.find_generators(&BigUint::from(12u32)),
            Err(CramerShoupErr::NotPrime(n)) if n == BigUint::from(12u32)
        ));
    }

    #[test]
    fn factors_of_known_values() {
        assert_eq!(distinct_prime_factors(&BigUint::from(10u32)), ints(&[2, 5]));
        assert_eq!(distinct_prime_factors(&BigUint::from(360u32)), ints(&[2, 3, 5]));
        assert_eq!(distinct_prime_factors(&BigUint::from(498u32)), ints(&[2, 3, 83]));
        assert_eq!(distinct_prime_factors(&BigUint::from(97u32)), ints(&[97]));
    }

    proptest! {
        #[test]
        fn matches_brute_force(p in prop::sample::select(vec![13u64, 101, 127, 229, 499])) {
            let gens = PrimitiveRoots.find_generators(&BigUint::from(p)).unwrap();
            let expected: Vec<BigUint> = (1..p)
                .filter(|g| generates_group(*g, p))
                .map(BigUint::from)
                .collect();
            prop_assert_eq!(gens, expected);
        }
    }
}
