//! Error types for the saltdigest core library
//!
//! Errors fall into two categories: validation errors raised synchronously
//! for bad caller arguments, and internal errors raised when the digest
//! service cannot be brought up at all.

use thiserror::Error;

pub mod internal;
pub mod validation;

pub use self::internal::InternalError;
pub use self::validation::ValidationError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the saltdigest core library
#[derive(Error, Debug)]
pub enum Error {
    /// Validation related errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Internal library errors
    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl Error {
    /// Whether the caller can do anything about this error by changing its arguments
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Whether the error means the digest service is unusable for the process lifetime
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::Validation(_) => false,
            Self::Internal(internal) => !internal.is_recoverable(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn test_invalid_parameter_error_creation() {
        let error = Error::Validation(ValidationError::invalid_parameter(
            "iterations",
            "must be at least 1",
        ));

        match error {
            Error::Validation(ValidationError::InvalidParameter { parameter, reason }) => {
                assert_eq!(parameter, "iterations");
                assert_eq!(reason, "must be at least 1");
            }
            _ => panic!("Expected Validation::InvalidParameter error"),
        }
    }

    #[test]
    fn test_algorithm_unavailable_error_creation() {
        let error = Error::Internal(InternalError::algorithm_unavailable(
            "SHA-1",
            "self-test failed",
        ));

        assert!(matches!(
            error,
            Error::Internal(InternalError::AlgorithmUnavailable { .. })
        ));
        assert!(error.to_string().contains("SHA-1"));
        assert!(error.to_string().contains("self-test failed"));
    }

    #[test]
    fn test_error_classification() {
        let validation: Error = ValidationError::invalid_parameter("num_bytes", "zero").into();
        assert!(validation.is_caller_error());
        assert!(!validation.is_fatal());

        let entropy: Error = InternalError::entropy_unavailable("getrandom failed").into();
        assert!(!entropy.is_caller_error());
        assert!(entropy.is_fatal());
    }

    #[test]
    fn test_error_display_is_transparent() {
        let error: Error = ValidationError::invalid_configuration("salt_length is zero").into();
        assert_eq!(
            error.to_string(),
            "Invalid configuration: salt_length is zero"
        );
    }

    #[test]
    fn test_error_debug() {
        let error: Error = InternalError::algorithm_unavailable("SHA-1", "missing").into();
        let debug_string = format!("{error:?}");

        assert!(debug_string.contains("Internal"));
        assert!(debug_string.contains("AlgorithmUnavailable"));
    }

    #[test]
    fn test_error_trait_implementation() {
        let error: Error = InternalError::entropy_unavailable("no entropy").into();

        // Should compile if Error implements std::error::Error
        let _: &dyn StdError = &error;
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_error() -> Result<()> {
            Err(ValidationError::invalid_parameter("iterations", "must be at least 1").into())
        }

        assert!(returns_error().is_err());
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }
}
