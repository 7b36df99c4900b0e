//! saltdigest Core Library
//!
//! SHA-1 digests with optional salting and iterative re-hashing, plus a
//! cryptographically secure salt generator.
//!
//! The free functions in this crate use a process-wide [`DigestHasher`]
//! created on first use. Construct your own [`DigestHasher`] to pick an
//! [`EngineMode`] or other settings.

pub mod config;
pub mod error;
pub mod hashing;
pub mod salt;

// Re-export main types
pub use config::{EngineMode, HasherConfig};
pub use error::{Error, Result};
pub use hashing::{DIGEST_LEN, Digest, DigestEngine, DigestHasher, Sha1Engine};
pub use salt::SaltGenerator;

/// Single-round, unsalted SHA-1 of `input`
pub fn sha1(input: &[u8]) -> Result<Digest> {
    Ok(DigestHasher::global()?.hash(input))
}

/// SHA-1 of `salt || input`; `None` means no salt
pub fn sha1_salted(input: &[u8], salt: Option<&[u8]>) -> Result<Digest> {
    Ok(DigestHasher::global()?.hash_salted(input, salt))
}

/// SHA-1 over `iterations` rounds, salting only the first
pub fn sha1_iterated(input: &[u8], salt: Option<&[u8]>, iterations: u32) -> Result<Digest> {
    DigestHasher::global()?.hash_iterated(input, salt, iterations)
}

/// SHA-1 of UTF-8 text
pub fn sha1_str(input: &str) -> Result<Digest> {
    Ok(DigestHasher::global()?.hash_str(input))
}

/// Salted SHA-1 of UTF-8 text
pub fn sha1_str_salted(input: &str, salt: Option<&[u8]>) -> Result<Digest> {
    Ok(DigestHasher::global()?.hash_str_salted(input, salt))
}

/// Iterated SHA-1 of UTF-8 text
pub fn sha1_str_iterated(input: &str, salt: Option<&[u8]>, iterations: u32) -> Result<Digest> {
    DigestHasher::global()?.hash_str_iterated(input, salt, iterations)
}

/// `num_bytes` cryptographically random bytes for use as a salt
pub fn generate_salt(num_bytes: usize) -> Result<Vec<u8>> {
    DigestHasher::global()?.generate_salt(num_bytes)
}
