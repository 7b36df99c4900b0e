//! Digest service configuration

use crate::error::ValidationError;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// How the digest service hands out engines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineMode {
    /// Fresh engine for every call; calls run in parallel
    #[default]
    PerCall,
    /// One engine behind a mutex; calls are serialized
    Shared,
}

impl std::fmt::Display for EngineMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineMode::PerCall => write!(f, "per_call"),
            EngineMode::Shared => write!(f, "shared"),
        }
    }
}

impl std::str::FromStr for EngineMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "per_call" => Ok(EngineMode::PerCall),
            "shared" => Ok(EngineMode::Shared),
            _ => Err(Error::Validation(ValidationError::invalid_configuration(
                &format!("Unknown engine mode: {s}"),
            ))),
        }
    }
}

/// Digest service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HasherConfig {
    pub engine_mode: EngineMode,
    pub default_iterations: u32,
    pub salt_length: usize,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            engine_mode: EngineMode::PerCall,
            default_iterations: 1,
            salt_length: 8,
        }
    }
}

impl HasherConfig {
    /// Create a configuration using a single shared engine
    pub fn shared() -> Self {
        Self {
            engine_mode: EngineMode::Shared,
            ..Self::default()
        }
    }

    /// Reject values the digest service cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.default_iterations == 0 {
            return Err(ValidationError::invalid_configuration(
                "default_iterations must be at least 1",
            )
            .into());
        }
        if self.salt_length == 0 {
            return Err(
                ValidationError::invalid_configuration("salt_length must be at least 1").into(),
            );
        }
        Ok(())
    }
}
