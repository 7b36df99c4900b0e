//! Core trait for digest engines

use super::Digest;

/// A stateful digest engine
///
/// Lifecycle: `idle -> accumulating (update) -> finalized (digest)`, and
/// `digest` returns the engine to idle. An engine is never shared between
/// two in-flight computations.
///
/// `DigestHasher` always runs on [`super::Sha1Engine`]. The trait is the
/// seam its round logic is written against, which lets tests drive that
/// logic with recording or faulty engines.
pub trait DigestEngine: Send {
    /// Feed bytes into the running state
    fn update(&mut self, data: &[u8]);

    /// Absorb `input`, finalize, and return the engine to idle
    fn digest(&mut self, input: &[u8]) -> Digest;

    /// Discard any accumulated state
    fn reset(&mut self);

    /// Algorithm name for logs and error messages
    fn algorithm(&self) -> &'static str;
}
