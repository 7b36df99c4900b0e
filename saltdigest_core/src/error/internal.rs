//! Internal library error types

use thiserror::Error;

/// Internal library errors
///
/// These are raised while bringing up the digest service, never per call.
#[derive(Error, Debug, Clone)]
pub enum InternalError {
    /// The digest algorithm is missing or failed its known-answer self-test
    #[error("Digest algorithm '{algorithm}' is unavailable: {reason}")]
    AlgorithmUnavailable { algorithm: String, reason: String },

    /// The operating system entropy source could not seed the random generator
    #[error("Secure random source is unavailable: {reason}")]
    EntropyUnavailable { reason: String },
}

impl InternalError {
    /// Create an algorithm unavailable error
    pub fn algorithm_unavailable(algorithm: &str, reason: &str) -> Self {
        Self::AlgorithmUnavailable {
            algorithm: algorithm.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an entropy unavailable error
    pub fn entropy_unavailable(reason: impl Into<String>) -> Self {
        Self::EntropyUnavailable {
            reason: reason.into(),
        }
    }

    /// Check if this error is recoverable
    ///
    /// Neither variant is: both mean the process is misconfigured.
    pub fn is_recoverable(&self) -> bool {
        false
    }
}
