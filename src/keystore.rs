//! Persistence of key material as flat integer records.
//!
//! A record is an ordered list of integers stored under a name. The file-backed store writes one
//! decimal integer per line. A scheme named `cramer_shoup` keeps its public key
//! `(p, g1, g2, X, Y, W)` in `cramer_shoup.pub` and its private key `(x1, x2, y1, y2, w)` in
//! `cramer_shoup`. On unix the private record is readable by its owner only.

use crate::api::{KeyPair, PrivateKey, PublicKey};
use crate::api_common::{CramerShoupErr, Result};
use log::debug;
use num_bigint::BigUint;
use quick_error::quick_error;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_SCHEME_NAME: &str = "cramer_shoup";

quick_error! {
    #[derive(Debug)]
    pub enum KeyStoreErr {
        Io(name: String, err: std::io::Error) {
            display("I/O error on key record '{}': {}", name, err)
            source(err)
        }
        MalformedLine { name: String, line: usize, content: String } {
            display("Line {} of key record '{}' is not a decimal integer: '{}'", line, name, content)
        }
    }
}

/// Durable storage for named integer records.
pub trait KeyStore {
    /// Write `values` under `name`, replacing any previous record.
    fn write_record(&self, name: &str, values: &[BigUint]) -> std::result::Result<(), KeyStoreErr>;

    /// Write a record holding secret values. Stores that can restrict access should do so.
    fn write_secret_record(&self, name: &str, values: &[BigUint]) -> std::result::Result<(), KeyStoreErr> {
        self.write_record(name, values)
    }

    /// Read back the record stored under `name`.
    fn read_record(&self, name: &str) -> std::result::Result<Vec<BigUint>, KeyStoreErr>;
}

/// Stores each record as a file named after it inside `dir`.
#[derive(Debug, Clone)]
pub struct FileKeyStore {
    dir: PathBuf,
}

impl FileKeyStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> FileKeyStore {
        FileKeyStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn record_path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl KeyStore for FileKeyStore {
    fn write_record(&self, name: &str, values: &[BigUint]) -> std::result::Result<(), KeyStoreErr> {
        let io_err = |err| KeyStoreErr::Io(name.to_string(), err);
        fs::create_dir_all(&self.dir).map_err(io_err)?;
        fs::write(self.record_path(name), encode_record(values)).map_err(io_err)?;
        debug!("wrote key record '{}' ({} values)", name, values.len());
        Ok(())
    }

    /// Permissions are set to 0600 before any value is written, including when the file already
    /// existed with wider permissions.
    fn write_secret_record(&self, name: &str, values: &[BigUint]) -> std::result::Result<(), KeyStoreErr> {
        let io_err = |err| KeyStoreErr::Io(name.to_string(), err);
        fs::create_dir_all(&self.dir).map_err(io_err)?;
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(self.record_path(name)).map_err(io_err)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(fs::Permissions::from_mode(0o600))
                .map_err(io_err)?;
        }
        file.write_all(encode_record(values).as_bytes())
            .map_err(io_err)?;
        debug!("wrote secret key record '{}' ({} values)", name, values.len());
        Ok(())
    }

    fn read_record(&self, name: &str) -> std::result::Result<Vec<BigUint>, KeyStoreErr> {
        let text = fs::read_to_string(self.record_path(name))
            .map_err(|err| KeyStoreErr::Io(name.to_string(), err))?;
        decode_record(name, &text)
    }
}

/// One decimal integer per line, newline terminated.
pub fn encode_record(values: &[BigUint]) -> String {
    values
        .iter()
        .map(|value| format!("{}\n", value))
        .collect()
}

/// Parse the output of `encode_record`. Blank lines are skipped.
pub fn decode_record(name: &str, text: &str) -> std::result::Result<Vec<BigUint>, KeyStoreErr> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            BigUint::parse_bytes(line.trim().as_bytes(), 10).ok_or_else(|| {
                KeyStoreErr::MalformedLine {
                    name: name.to_string(),
                    line: index + 1,
                    content: line.to_string(),
                }
            })
        })
        .collect()
}

pub fn public_record_name(scheme_name: &str) -> String {
    format!("{}.pub", scheme_name)
}

pub fn private_record_name(scheme_name: &str) -> String {
    scheme_name.to_string()
}

/// Persist both halves of `key_pair` under the names derived from `scheme_name`.
pub fn save_key_pair<S: KeyStore>(store: &S, scheme_name: &str, key_pair: &KeyPair) -> Result<()> {
    store.write_record(
        &public_record_name(scheme_name),
        &key_pair.public_key().to_record(),
    )?;
    store.write_secret_record(
        &private_record_name(scheme_name),
        &key_pair.private_key().to_record(),
    )?;
    Ok(())
}

/// Load and validate the key pair persisted under `scheme_name`.
pub fn load_key_pair<S: KeyStore>(store: &S, scheme_name: &str) -> Result<KeyPair> {
    let public_name = public_record_name(scheme_name);
    let private_name = private_record_name(scheme_name);
    let public_key = PublicKey::from_record(&public_name, &store.read_record(&public_name)?)?;
    let private_key = PrivateKey::from_record(&private_name, &store.read_record(&private_name)?)?;
    debug!("loaded key pair '{}' over p = {}", scheme_name, public_key.p());
    KeyPair::new(public_key, private_key)
}

pub(crate) fn check_record_len(name: &str, values: &[BigUint], expected: usize) -> Result<()> {
    if values.len() == expected {
        Ok(())
    } else {
        Err(CramerShoupErr::InvalidKeyRecord {
            name: name.to_string(),
            expected,
            actual: values.len(),
        })
    }
}
