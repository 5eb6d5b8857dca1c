//! Functionality related to the [Hashed] struct.
use std::fmt::Write;

use sha2::{Digest, Sha224};

/// Re-export traits
pub use super::traits::*;

/// Length in bytes of a SHA-224 digest.
pub const DIGEST_LEN: usize = 28;

/// A fixed-length, H-byte cryptographic hash.
pub type Hash<const H: usize> = [u8; H];

/// Bytes hashed once with SHA-224.
///
/// There is no salt. The digest format, unsalted SHA-224 rendered as lowercase hex, matches the
/// one older tools wrote, so identical passwords produce identical digests. This is a known
/// weakness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hashed {
    hash: Hash<DIGEST_LEN>,
}
impl Hashed {
    /// Hash a byte slice.
    pub fn hash_bytes(byte_slice: &[u8]) -> Self {
        let mut hash: Hash<DIGEST_LEN> = [0u8; DIGEST_LEN];
        hash.copy_from_slice(&Sha224::digest(byte_slice));

        Self { hash }
    }

    /// Create a [Hashed] from its fields.
    pub fn from_fields(hash: Hash<DIGEST_LEN>) -> Self {
        Self { hash }
    }

    /// Parse a digest from the hexadecimal form returned by [Hashed::to_hex]. Either letter case
    /// is accepted.
    ///
    /// Return [None] if `hex` is not exactly [DIGEST_LEN] bytes of hexadecimal.
    pub fn from_hex(hex: &str) -> Option<Self> {
        if hex.len() != DIGEST_LEN * 2 {
            return None;
        }
        let mut hash: Hash<DIGEST_LEN> = [0u8; DIGEST_LEN];
        for (byte, pair) in hash.iter_mut().zip(hex.as_bytes().chunks_exact(2)) {
            let high = char::from(pair[0]).to_digit(16)?;
            let low = char::from(pair[1]).to_digit(16)?;
            *byte = (high << 4 | low) as u8;
        }
        Some(Self::from_fields(hash))
    }

    /// Check whether the given bytes match the bytes used to make this [Hashed].
    pub fn check_match(&self, byte_slice: &[u8]) -> bool {
        let hashed_input = Self::hash_bytes(byte_slice);
        self.hash() == hashed_input.hash()
    }

    /// Return the [Hash] of this [Hashed].
    pub fn hash(&self) -> &Hash<DIGEST_LEN> {
        &self.hash
    }

    /// Render the digest as lowercase hexadecimal, the form stored in the `user` table.
    pub fn to_hex(&self) -> String {
        self.hash
            .iter()
            .fold(String::with_capacity(DIGEST_LEN * 2), |mut acc, byte| {
                // Writing into a String cannot fail.
                let _ = write!(acc, "{byte:02x}");
                acc
            })
    }
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use pretty_assertions::{assert_eq, assert_ne};

    use super::{super::traits::*, *};

    const TEST_BYTES: &[u8] = b"password";
    const TEST_BYTES_DIFFERENT: &[u8] = b"passwore";
    const TEST_UTF8: &str = "三思而后行。";

    #[test]
    fn sha224_known_vectors() {
        let empty: Hashed = "".into_hashed();
        let abc: Hashed = "abc".into_hashed();

        assert_eq!(
            empty.hash(),
            &hex!("d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f")
        );
        assert_eq!(
            abc.hash(),
            &hex!("23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7")
        );
        assert_eq!(
            abc.to_hex(),
            "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"
        );
    }

    #[test]
    fn sha224_consistency() {
        let hash_1: Hashed = TEST_BYTES.into_hashed();
        let hash_2: Hashed = TEST_BYTES.to_vec().into_hashed();
        let hash_different: Hashed = TEST_BYTES_DIFFERENT.into_hashed();

        // Unsalted: the same input always yields the same digest.
        assert_eq!(hash_1, hash_2);
        assert_ne!(hash_1, hash_different);

        assert!(TEST_BYTES.check_match(&hash_1));
        assert!(!TEST_BYTES_DIFFERENT.check_match(&hash_1));
    }

    #[test]
    fn utf8_input() {
        let from_str: Hashed = TEST_UTF8.into_hashed();
        let from_string: Hashed = String::from(TEST_UTF8).into_hashed();
        let from_bytes: Hashed = TEST_UTF8.as_bytes().into_hashed();

        assert_eq!(from_str, from_string);
        assert_eq!(from_str, from_bytes);
        assert_eq!(from_str.to_hex().len(), DIGEST_LEN * 2);
        assert!(TEST_UTF8.check_match(&from_bytes));
    }

    #[test]
    fn from_fields_round_trip() {
        let hashed: Hashed = "abc".into_hashed();
        assert_eq!(Hashed::from_fields(*hashed.hash()), hashed);
    }

    #[test]
    fn from_hex_round_trip() {
        let hashed: Hashed = "abc".into_hashed();
        assert_eq!(Hashed::from_hex(&hashed.to_hex()), Some(hashed.clone()));
        assert_eq!(
            Hashed::from_hex("23097D223405D8228642A477BDA255B32AADBCE4BDA0B3F7E36C9DA7"),
            Some(hashed)
        );
        assert!("abc".check_match(
            &Hashed::from_hex("23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7").unwrap()
        ));
    }

    #[test]
    fn from_hex_rejects_malformed_digests() {
        assert_eq!(Hashed::from_hex(""), None);
        assert_eq!(Hashed::from_hex("23097d22"), None);
        assert_eq!(
            Hashed::from_hex("23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da70"),
            None
        );
        assert_eq!(
            Hashed::from_hex("zz097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"),
            None
        );
        assert_eq!(
            Hashed::from_hex("+3097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"),
            None
        );
        assert_eq!(Hashed::from_hex(&"é".repeat(28)), None);
    }
}
