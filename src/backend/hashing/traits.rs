//! Functionality related to hashing different types.
use super::hashed::*;

/// Implementors of this trait can be hashed into a [Hashed].
///
/// The easiest way to implement [IntoHashed::into_hashed] is to convert the type to a `u8` slice
/// then return [Hashed::hash_bytes].
///
/// The easiest way to implement [IntoHashed::check_match] is to convert the type to a `u8` slice
/// then return [Hashed::check_match].
pub trait IntoHashed {
    /// Hash this value.
    fn into_hashed(self) -> Hashed;

    /// Check whether the given entity, when hashed, matches the given [Hashed].
    fn check_match(self, hashed: &Hashed) -> bool;
}

// Implementations for some external types.
macro_rules! impl_into_hashed_byte_vec {
    ($($t:ty),+) => {
        $(impl IntoHashed for $t {
            fn into_hashed(self) -> Hashed {
                let byte_vec: Vec<u8> = self.into();
                Hashed::hash_bytes(&byte_vec)
            }

            fn check_match(self, hashed: &Hashed) -> bool {
                let byte_vec: Vec<u8> = self.into();
                hashed.check_match(&byte_vec)
            }
        })*
    }
}
impl_into_hashed_byte_vec!(Vec<u8>, &[u8], String, &str);
