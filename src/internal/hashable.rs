use crate::internal::ByteVector;
use num_bigint::BigUint;

/// Typeclass for converting an implementing type to a stable byte representation
/// which can be used for hashing (and thus the hash value will also remain consistent).
///
/// Integers hash as their decimal string, and composites concatenate the bytes of
/// their parts in order with no separator.
pub trait Hashable {
    /// Convert self to a stable byte representation.
    fn to_bytes(&self) -> ByteVector;
}

impl Hashable for u8 {
    fn to_bytes(&self) -> ByteVector {
        vec![*self]
    }
}

impl Hashable for BigUint {
    fn to_bytes(&self) -> ByteVector {
        self.to_str_radix(10).into_bytes()
    }
}

impl Hashable for str {
    fn to_bytes(&self) -> ByteVector {
        self.as_bytes().to_vec()
    }
}

impl<T> Hashable for Vec<T>
where
    T: Hashable,
{
    fn to_bytes(&self) -> ByteVector {
        let mut result: Vec<u8> = Vec::new();
        for t in self.iter() {
            let mut bytes = t.to_bytes();
            result.append(&mut bytes);
        }
        result
    }
}

impl<'a, T: Hashable, U: Hashable, V: Hashable> Hashable for (&'a T, &'a U, &'a V) {
    fn to_bytes(&self) -> ByteVector {
        vec![self.0.to_bytes(), self.1.to_bytes(), self.2.to_bytes()].to_bytes()
    }
}
