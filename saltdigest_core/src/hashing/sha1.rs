//! SHA-1 digest engine

use super::traits::DigestEngine;
use super::{DIGEST_LEN, Digest};
use sha1::{Digest as Sha1Digest, Sha1};

/// Well-known SHA-1 test vector used for the construction-time self-test
pub(crate) const KNOWN_ANSWER_INPUT: &[u8] = b"abc";
pub(crate) const KNOWN_ANSWER_DIGEST: [u8; DIGEST_LEN] = [
    0xa9, 0x99, 0x3e, 0x36, 0x47, 0x06, 0x81, 0x6a, 0xba, 0x3e, 0x25, 0x71, 0x78, 0x50, 0xc2, 0x6c,
    0x9c, 0xd0, 0xd8, 0x9d,
];

/// SHA-1 engine backed by the `sha1` crate
#[derive(Clone, Default)]
pub struct Sha1Engine {
    hasher: Sha1,
}

impl Sha1Engine {
    pub fn new() -> Self {
        Self {
            hasher: Sha1::new(),
        }
    }
}

impl std::fmt::Debug for Sha1Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sha1Engine").finish_non_exhaustive()
    }
}

impl DigestEngine for Sha1Engine {
    fn update(&mut self, data: &[u8]) {
        Sha1Digest::update(&mut self.hasher, data);
    }

    fn digest(&mut self, input: &[u8]) -> Digest {
        Sha1Digest::update(&mut self.hasher, input);
        let output = Sha1Digest::finalize_reset(&mut self.hasher);

        let mut bytes = [0u8; DIGEST_LEN];
        bytes.copy_from_slice(&output);
        Digest::from_bytes(bytes)
    }

    fn reset(&mut self) {
        Sha1Digest::reset(&mut self.hasher);
    }

    fn algorithm(&self) -> &'static str {
        "SHA-1"
    }
}
