//! SHA-1 digest computation with optional salting and iterative re-hashing
//!
//! The [`DigestHasher`] service owns the engine policy (fresh engine per
//! call, or one shared engine behind a mutex) and the secure salt source.

use crate::error::ValidationError;

mod hasher;
mod sha1;
mod traits;

pub use hasher::DigestHasher;
pub use sha1::Sha1Engine;
pub use traits::DigestEngine;

/// Output size of SHA-1 in bytes
pub const DIGEST_LEN: usize = 20;

/// A raw SHA-1 digest
///
/// Encoding to hex or base64 is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Compare against stored bytes without short-circuiting on the first mismatch
    pub fn constant_time_eq(&self, other: &[u8]) -> bool {
        if other.len() != DIGEST_LEN {
            return false;
        }

        let mut result = 0u8;
        for (a, b) in self.0.iter().zip(other.iter()) {
            result |= a ^ b;
        }
        result == 0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for Vec<u8> {
    fn from(digest: Digest) -> Self {
        digest.to_vec()
    }
}

impl TryFrom<&[u8]> for Digest {
    type Error = ValidationError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; DIGEST_LEN] = bytes.try_into().map_err(|_| {
            ValidationError::invalid_parameter(
                "digest",
                &format!("expected {DIGEST_LEN} bytes, got {}", bytes.len()),
            )
        })?;
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_conversions() {
        let bytes = [7u8; DIGEST_LEN];
        let digest = Digest::from(bytes);

        assert_eq!(digest.as_bytes(), &bytes);
        assert_eq!(digest.as_ref(), &bytes[..]);
        assert_eq!(Vec::<u8>::from(digest), bytes.to_vec());
        assert_eq!(digest.into_bytes(), bytes);
    }

    #[test]
    fn test_try_from_slice_rejects_wrong_length() {
        let short = [0u8; DIGEST_LEN - 1];
        let result = Digest::try_from(&short[..]);

        assert!(matches!(
            result,
            Err(ValidationError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_try_from_slice_accepts_exact_length() {
        let exact = [1u8; DIGEST_LEN];
        let digest = Digest::try_from(&exact[..]).unwrap();
        assert_eq!(digest.as_bytes(), &exact);
    }

    #[test]
    fn test_constant_time_eq() {
        let digest = Digest::from([3u8; DIGEST_LEN]);

        assert!(digest.constant_time_eq(&[3u8; DIGEST_LEN]));

        let mut last_differs = [3u8; DIGEST_LEN];
        last_differs[DIGEST_LEN - 1] = 4;
        assert!(!digest.constant_time_eq(&last_differs));

        assert!(!digest.constant_time_eq(&[3u8; DIGEST_LEN + 1]));
        assert!(!digest.constant_time_eq(&[]));
    }
}
