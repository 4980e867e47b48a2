use crate::internal::hashable::Hashable;
use sha2::Digest;

/// Hash function producing a fixed-length, lowercase hexadecimal digest.
pub trait HexHashing {
    fn hash<T: Hashable + ?Sized>(&self, t: &T) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256;

impl HexHashing for Sha256 {
    fn hash<T: Hashable + ?Sized>(&self, t: &T) -> String {
        let mut hasher = sha2::Sha256::default();
        hasher.update(t.to_bytes().as_slice());
        hex::encode(hasher.finalize())
    }
}
