#![doc(html_no_source)] // use github for source browsing

//! An implementation of the Cramer-Shoup public-key cryptosystem over the multiplicative group of
//! integers modulo a prime.
//!
//! Every ciphertext carries an integrity tag bound to a hash of its other components, so a
//! modified ciphertext is rejected during decryption instead of yielding a plaintext. The
//! default parameters use small primes and are meant for studying the construction, not for
//! protecting data.
//!
//! Start exploring the [Api documentation](api/index.html)
//!
//! ## Basic Encrypt/Decrypt Example
//! ```rust
//! use cramer_shoup::prelude::*;
//! use num_bigint::BigUint;
//!
//! // key records are written to this directory at construction
//! let store = FileKeyStore::new(std::env::temp_dir().join("cramer-shoup-doc-basic"));
//!
//! // generate a key pair over a random prime in [100, 500)
//! let mut scheme = CramerShoup::new(&store).unwrap();
//!
//! // messages are integers smaller than the modulus
//! let message = BigUint::from(42u32);
//!
//! // encrypt!
//! let ciphertext = scheme.cipher(&message).unwrap();
//!
//! // decrypt!
//! let decrypted = scheme.decipher(&ciphertext).unwrap();
//!
//! // message recovered.
//! assert_eq!(message, decrypted);
//! # std::fs::remove_dir_all(store.dir()).unwrap();
//! ```
//!
//! ## Tampering Is Detected
//! ```rust
//! use cramer_shoup::prelude::*;
//! use cramer_shoup::api::{Ciphertext, CramerShoupErr};
//! use num_bigint::BigUint;
//!
//! let store = FileKeyStore::new(std::env::temp_dir().join("cramer-shoup-doc-tamper"));
//! let mut scheme = CramerShoup::new(&store).unwrap();
//! let ciphertext = scheme.cipher(&BigUint::from(7u32)).unwrap();
//!
//! // change the integrity tag
//! let (b1, b2, c, v) = ciphertext.into_parts();
//! let tampered = Ciphertext::new(b1, b2, c, (v + 1u32) % scheme.public_key().p());
//!
//! assert!(matches!(
//!     scheme.decipher(&tampered),
//!     Err(CramerShoupErr::VerificationFailed)
//! ));
//! # std::fs::remove_dir_all(store.dir()).unwrap();
//! ```
//!
//! ## Custom Parameters and Reloading Keys
//! ```rust
//! use cramer_shoup::prelude::*;
//! use num_bigint::BigUint;
//!
//! let store = FileKeyStore::new(std::env::temp_dir().join("cramer-shoup-doc-reload"));
//!
//! // a larger prime range, stored as `bob.pub` and `bob`
//! let config = KeyGenConfig::default()
//!     .with_bounds(10_000, 20_000)
//!     .unwrap()
//!     .with_scheme_name("bob");
//! let mut scheme = CramerShoup::new_with_rand(&config, &store, rand::thread_rng()).unwrap();
//! let ciphertext = scheme.cipher(&BigUint::from(9_999u32)).unwrap();
//!
//! // a later process rebuilds the scheme from the persisted records
//! let reloaded = CramerShoup::load(&store, "bob", Sha256, RandomInts::default()).unwrap();
//! assert_eq!(reloaded.decipher(&ciphertext).unwrap(), BigUint::from(9_999u32));
//! # std::fs::remove_dir_all(store.dir()).unwrap();
//! ```

pub mod prelude;
mod internal;
pub mod api;
mod api_common;
pub mod keystore;
