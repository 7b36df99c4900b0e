//! Cryptographically secure salt generation

use crate::Result;
use crate::error::{InternalError, ValidationError};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::sync::{Mutex, PoisonError};

/// Salt source backed by a ChaCha-based CSPRNG seeded once from the OS
///
/// Seeding fails instead of falling back to a weaker source when the OS
/// entropy source is unavailable.
pub struct SaltGenerator {
    rng: Mutex<StdRng>,
}

impl std::fmt::Debug for SaltGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaltGenerator").finish_non_exhaustive()
    }
}

impl SaltGenerator {
    /// Seed a new generator from the operating system entropy source
    pub fn new() -> std::result::Result<Self, InternalError> {
        let rng = StdRng::try_from_os_rng()
            .map_err(|e| InternalError::entropy_unavailable(e.to_string()))?;
        log::debug!("Seeded salt generator from OS entropy");

        Ok(Self {
            rng: Mutex::new(rng),
        })
    }

    /// Return `num_bytes` random bytes
    pub fn generate(&self, num_bytes: usize) -> Result<Vec<u8>> {
        if num_bytes == 0 {
            return Err(ValidationError::invalid_parameter(
                "num_bytes",
                "numBytes argument must be a positive integer (1 or larger)",
            )
            .into());
        }

        let mut bytes = Vec::new();
        bytes.try_reserve_exact(num_bytes).map_err(|e| {
            ValidationError::invalid_parameter(
                "num_bytes",
                &format!("cannot allocate a {num_bytes}-byte salt: {e}"),
            )
        })?;
        bytes.resize(num_bytes, 0);
        // fill_bytes either completes or panics, so a poisoned RNG is still sound
        self.rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .fill_bytes(&mut bytes);

        log::trace!("Generated {num_bytes}-byte salt");
        Ok(bytes)
    }
}
