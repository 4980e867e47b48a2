//! Convenience re-export of common structs and traits needed for using CramerShoup
//!
//! ```
//! use cramer_shoup::prelude::*;
//!
//! let store = FileKeyStore::new(std::env::temp_dir().join("cramer-shoup-doc-prelude"));
//! let scheme: CramerShoup<Sha256, RandomInts<_>> = CramerShoup::new(&store).unwrap();
//! # std::fs::remove_dir_all(store.dir()).unwrap();
//! ```

// necessary for instantiating and storing a CramerShoup as a struct member
pub use crate::api::CramerShoup;
pub use crate::api::KeyGenConfig;
pub use crate::api::RandomInts;
pub use crate::api::Sha256;
pub use crate::keystore::FileKeyStore;

// traits that define functionality on CramerShoup and its collaborators
pub use crate::api::CryptoOps;
pub use crate::api::GeneratorFinder;
pub use crate::api::HexHashing;
pub use crate::api::PrimeSource;
pub use crate::api::RandomGen;
pub use crate::keystore::KeyStore;
