use crate::internal::InternalError;
use crate::keystore::KeyStoreErr;
use num_bigint::BigUint;
use quick_error::quick_error;

quick_error! {
    /// Errors generated by the Cramer-Shoup API
    #[derive(Debug)]
    pub enum CramerShoupErr {
        InvalidPrimeRange { low: BigUint, high: BigUint } {
            display("The prime range [{}, {}) is empty.", low, high)
        }
        NoPrimeInRange { low: BigUint, high: BigUint } {
            display("No prime exists in the range [{}, {}).", low, high)
        }
        NotPrime(n: BigUint) {
            display("The modulus {} is not prime.", n)
        }
        TooFewGenerators { p: BigUint, count: usize } {
            display("The group modulo {} has {} distinct generator(s); two are required.", p, count)
        }
        MalformedDigest(digest: String) {
            display("The hash function returned '{}', which is not a hexadecimal digest.", digest)
        }
        MessageOutOfRange(p: BigUint) {
            display("The message must be smaller than the modulus {}.", p)
        }
        CiphertextOutOfRange(p: BigUint) {
            display("Every ciphertext component must be smaller than the modulus {}.", p)
        }
        VerificationFailed {
            display("Ciphertext verification failed. It was modified or not encrypted to this key.")
        }
        InvalidPublicKey(reason: &'static str) {
            display("The public key is invalid: {}.", reason)
        }
        InvalidKeyPair(reason: &'static str) {
            display("The private key does not match the public key: {}.", reason)
        }
        InvalidKeyRecord { name: String, expected: usize, actual: usize } {
            display("Key record '{}' holds {} values; expected {}.", name, actual, expected)
        }
        KeyStore(err: KeyStoreErr) {
            from()
            display("Key storage failed: {}", err)
            source(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, CramerShoupErr>;

impl From<InternalError> for CramerShoupErr {
    fn from(err: InternalError) -> Self {
        match err {
            InternalError::MalformedDigest(digest) => CramerShoupErr::MalformedDigest(digest),
            InternalError::MessageOutOfRange(p) => CramerShoupErr::MessageOutOfRange(p),
            InternalError::CiphertextOutOfRange(p) => CramerShoupErr::CiphertextOutOfRange(p),
            InternalError::VerificationFailed => CramerShoupErr::VerificationFailed,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verification_failure_maps_to_distinct_variant() {
        let err = CramerShoupErr::from(InternalError::VerificationFailed);
        assert!(matches!(err, CramerShoupErr::VerificationFailed));
    }

    #[test]
    fn display_names_the_range() {
        let err = CramerShoupErr::NoPrimeInRange {
            low: BigUint::from(24u32),
            high: BigUint::from(29u32),
        };
        assert_eq!(err.to_string(), "No prime exists in the range [24, 29).");
    }

    #[test]
    fn keystore_error_has_source() {
        use std::error::Error;
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = CramerShoupErr::from(KeyStoreErr::Io("cramer_shoup".to_string(), io));
        assert!(err.source().is_some());
    }
}
