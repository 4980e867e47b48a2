use num_bigint::{BigUint, RandBigInt};
use rand::{CryptoRng, Rng, RngCore};

/// Generation of uniformly distributed integers for key generation and encryption.
pub trait RandomGen {
    /// Uniform integer in `[0, bound)`. `bound` must be non-zero.
    fn random_below(&mut self, bound: &BigUint) -> BigUint;

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    fn random_index(&mut self, len: usize) -> usize;
}

#[derive(Debug)]
pub struct RandomInts<T: CryptoRng + RngCore> {
    pub(crate) rng: T,
}

impl Default for RandomInts<rand::rngs::ThreadRng> {
    fn default() -> Self {
        RandomInts::<rand::rngs::ThreadRng>::new(rand::thread_rng())
    }
}

impl<CR: CryptoRng + RngCore> RandomInts<CR> {
    pub fn new(rng: CR) -> Self {
        RandomInts { rng }
    }
}

impl<CR: CryptoRng + RngCore> RandomGen for RandomInts<CR> {
    fn random_below(&mut self, bound: &BigUint) -> BigUint {
        self.rng.gen_biguint_below(bound)
    }

    fn random_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use std::collections::VecDeque;

    /// Replays scripted values, then falls back to zero.
    #[derive(Default)]
    pub(crate) struct ScriptedRandom {
        pub(crate) below: VecDeque<BigUint>,
        pub(crate) indices: VecDeque<usize>,
    }

    impl ScriptedRandom {
        pub(crate) fn new(below: &[u32], indices: &[usize]) -> Self {
            ScriptedRandom {
                below: below.iter().map(|v| BigUint::from(*v)).collect(),
                indices: indices.iter().copied().collect(),
            }
        }
    }

    impl RandomGen for ScriptedRandom {
        fn random_below(&mut self, bound: &BigUint) -> BigUint {
            self.below.pop_front().unwrap_or_default() % bound
        }

        fn random_index(&mut self, len: usize) -> usize {
            self.indices.pop_front().unwrap_or(0) % len
        }
    }

    proptest! {
        #[test]
        fn random_below_stays_below(seed in any::<u64>(), bound in 1u64..) {
            let mut random = RandomInts::new(rand_chacha::ChaChaRng::seed_from_u64(seed));
            let bound = BigUint::from(bound);
            prop_assert!(random.random_below(&bound) < bound);
        }

        #[test]
        fn random_index_stays_below(seed in any::<u64>(), len in 1usize..1000) {
            let mut random = RandomInts::new(rand_chacha::ChaChaRng::seed_from_u64(seed));
            prop_assert!(random.random_index(len) < len);
        }
    }

    #[test]
    fn same_seed_same_values() {
        let bound = BigUint::from(1_000_003u32);
        let mut one = RandomInts::new(rand_chacha::ChaChaRng::seed_from_u64(7));
        let mut two = RandomInts::new(rand_chacha::ChaChaRng::seed_from_u64(7));
        for _ in 0..10 {
            assert_eq!(one.random_below(&bound), two.random_below(&bound));
        }
    }
}
