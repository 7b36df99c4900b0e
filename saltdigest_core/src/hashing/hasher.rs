//! The digest service

use super::sha1::{KNOWN_ANSWER_DIGEST, KNOWN_ANSWER_INPUT, Sha1Engine};
use super::traits::DigestEngine;
use super::{DIGEST_LEN, Digest};
use crate::config::{EngineMode, HasherConfig};
use crate::error::{InternalError, ValidationError};
use crate::salt::SaltGenerator;
use crate::{Error, Result};
use once_cell::sync::OnceCell;
use std::sync::{Mutex, MutexGuard};

/// Where engines come from for each call
enum EngineSlot {
    PerCall,
    Shared(Mutex<Sha1Engine>),
}

/// Salted, iterated SHA-1 digests plus secure salt generation
///
/// `DigestHasher` is `Send + Sync`. In [`EngineMode::PerCall`] every call
/// builds its own engine, so threads never contend. In
/// [`EngineMode::Shared`] one engine is locked for the whole of each call,
/// which serializes hashing. Both modes produce identical output.
pub struct DigestHasher {
    config: HasherConfig,
    engine: EngineSlot,
    salts: SaltGenerator,
}

impl std::fmt::Debug for DigestHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DigestHasher")
            .field("config", &self.config)
            .field("salts", &self.salts)
            .finish()
    }
}

impl DigestHasher {
    /// Create a digest service with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HasherConfig::default())
    }

    /// Create a digest service with a specific configuration
    ///
    /// Runs a SHA-1 known-answer self-test and seeds the salt generator.
    /// Failure of either is fatal for the caller.
    pub fn with_config(config: HasherConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::bring_up(config)?)
    }

    /// The process-wide digest service
    ///
    /// Initialized on first use with the default configuration. An
    /// initialization failure is remembered and returned on every call.
    pub fn global() -> Result<&'static Self> {
        static INSTANCE: OnceCell<std::result::Result<DigestHasher, InternalError>> =
            OnceCell::new();

        INSTANCE
            .get_or_init(|| Self::bring_up(HasherConfig::default()))
            .as_ref()
            .map_err(|e| Error::Internal(e.clone()))
    }

    fn bring_up(config: HasherConfig) -> std::result::Result<Self, InternalError> {
        let mut probe = Sha1Engine::new();
        self_test(&mut probe)?;

        let engine = match config.engine_mode {
            EngineMode::PerCall => EngineSlot::PerCall,
            EngineMode::Shared => EngineSlot::Shared(Mutex::new(probe)),
        };
        let salts = SaltGenerator::new()?;

        log::debug!(
            "Digest service ready (engine mode: {}, default iterations: {}, salt length: {})",
            config.engine_mode,
            config.default_iterations,
            config.salt_length
        );

        Ok(Self {
            config,
            engine,
            salts,
        })
    }

    /// Get the active configuration
    pub fn config(&self) -> &HasherConfig {
        &self.config
    }

    /// Single-round, unsalted digest of `input`
    pub fn hash(&self, input: &[u8]) -> Digest {
        self.hash_salted(input, None)
    }

    /// Single-round digest of `salt || input`; `None` means no salt
    pub fn hash_salted(&self, input: &[u8], salt: Option<&[u8]>) -> Digest {
        self.with_engine(|engine| digest_rounds(engine, input, salt, 1))
    }

    /// Digest of `input` stretched over `iterations` rounds
    ///
    /// Only the first round is salted; every later round re-hashes the
    /// previous raw output without the salt. Stored digests depend on this.
    pub fn hash_iterated(
        &self,
        input: &[u8],
        salt: Option<&[u8]>,
        iterations: u32,
    ) -> Result<Digest> {
        check_iterations(iterations)?;
        Ok(self.with_engine(|engine| digest_rounds(engine, input, salt, iterations)))
    }

    /// UTF-8 text variant of [`Self::hash`]
    pub fn hash_str(&self, input: &str) -> Digest {
        self.hash(input.as_bytes())
    }

    /// UTF-8 text variant of [`Self::hash_salted`]
    pub fn hash_str_salted(&self, input: &str, salt: Option<&[u8]>) -> Digest {
        self.hash_salted(input.as_bytes(), salt)
    }

    /// UTF-8 text variant of [`Self::hash_iterated`]
    pub fn hash_str_iterated(
        &self,
        input: &str,
        salt: Option<&[u8]>,
        iterations: u32,
    ) -> Result<Digest> {
        self.hash_iterated(input.as_bytes(), salt, iterations)
    }

    /// Hash several inputs with the same salt and iteration count
    ///
    /// Results keep the input order. In shared mode the engine is held for
    /// the whole batch.
    pub fn hash_batch(
        &self,
        inputs: &[&[u8]],
        salt: Option<&[u8]>,
        iterations: u32,
    ) -> Result<Vec<Digest>> {
        check_iterations(iterations)?;
        Ok(self.with_engine(|engine| {
            inputs
                .iter()
                .map(|input| digest_rounds(engine, input, salt, iterations))
                .collect()
        }))
    }

    /// Recompute the digest and compare it with `expected` in constant time
    pub fn verify(
        &self,
        input: &[u8],
        salt: Option<&[u8]>,
        iterations: u32,
        expected: &[u8],
    ) -> Result<bool> {
        if expected.len() != DIGEST_LEN {
            return Err(ValidationError::invalid_parameter(
                "expected",
                &format!("expected {DIGEST_LEN} bytes, got {}", expected.len()),
            )
            .into());
        }
        let actual = self.hash_iterated(input, salt, iterations)?;
        Ok(actual.constant_time_eq(expected))
    }

    /// Return `num_bytes` cryptographically random bytes
    pub fn generate_salt(&self, num_bytes: usize) -> Result<Vec<u8>> {
        self.salts.generate(num_bytes)
    }

    /// Generate a salt of the configured default length
    pub fn generate_default_salt(&self) -> Result<Vec<u8>> {
        self.salts.generate(self.config.salt_length)
    }

    fn with_engine<R>(&self, f: impl FnOnce(&mut dyn DigestEngine) -> R) -> R {
        match &self.engine {
            EngineSlot::PerCall => f(&mut Sha1Engine::new()),
            EngineSlot::Shared(engine) => {
                let mut guard = lock_engine(engine);
                f(&mut *guard)
            }
        }
    }
}

/// Lock the shared engine, recovering from a poisoned lock
///
/// A panic mid-call can at most leave salt bytes in the running state, so
/// the engine is reset before reuse.
fn lock_engine(engine: &Mutex<Sha1Engine>) -> MutexGuard<'_, Sha1Engine> {
    engine.lock().unwrap_or_else(|poisoned| {
        log::warn!("Shared digest engine lock was poisoned; resetting engine");
        let mut guard = poisoned.into_inner();
        guard.reset();
        engine.clear_poison();
        guard
    })
}

fn check_iterations(iterations: u32) -> Result<()> {
    if iterations == 0 {
        return Err(ValidationError::invalid_parameter("iterations", "must be at least 1").into());
    }
    Ok(())
}

fn self_test(engine: &mut dyn DigestEngine) -> std::result::Result<(), InternalError> {
    let digest = engine.digest(KNOWN_ANSWER_INPUT);
    if digest.as_bytes() != &KNOWN_ANSWER_DIGEST {
        return Err(InternalError::algorithm_unavailable(
            engine.algorithm(),
            "known-answer self-test failed",
        ));
    }
    Ok(())
}

fn digest_rounds(
    engine: &mut dyn DigestEngine,
    input: &[u8],
    salt: Option<&[u8]>,
    iterations: u32,
) -> Digest {
    if let Some(salt) = salt {
        engine.update(salt);
    }

    let mut result = engine.digest(input);
    for _ in 1..iterations {
        engine.reset();
        result = engine.digest(result.as_bytes());
    }

    log::trace!(
        "{} digest: {} input bytes, salted: {}, rounds: {iterations}",
        engine.algorithm(),
        input.len(),
        salt.is_some()
    );
    result
}
