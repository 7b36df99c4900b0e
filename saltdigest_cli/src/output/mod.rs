mod formatters;

pub use formatters::{JsonFormatter, TextFormatter};

use anyhow::Result;
use serde::Serialize;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Parse output format from string
    pub fn from_string(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => anyhow::bail!("Unknown output format: {}", s),
        }
    }

    /// Build the formatter for this format
    pub fn formatter(self, use_color: bool) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter::new(use_color)),
            Self::Json => Box::new(JsonFormatter::new(true)),
        }
    }
}

/// A computed digest ready for display, with all bytes hex-encoded
#[derive(Debug, Clone, Serialize)]
pub struct DigestReport {
    pub algorithm: &'static str,
    pub digest: String,
    pub salt: Option<String>,
    pub iterations: u32,
}

impl DigestReport {
    pub fn new(digest: &[u8], salt: Option<&[u8]>, iterations: u32) -> Self {
        Self {
            algorithm: "sha1",
            digest: hex::encode(digest),
            salt: salt.map(hex::encode),
            iterations,
        }
    }
}

/// A generated salt ready for display
#[derive(Debug, Clone, Serialize)]
pub struct SaltReport {
    pub salt: String,
    pub length: usize,
}

impl SaltReport {
    pub fn new(salt: &[u8]) -> Self {
        Self {
            salt: hex::encode(salt),
            length: salt.len(),
        }
    }
}

/// Outcome of checking input against a stored digest
#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    pub matches: bool,
    pub iterations: u32,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    fn format_digest(&self, report: &DigestReport) -> Result<String>;

    fn format_salt(&self, report: &SaltReport) -> Result<String>;

    fn format_verify(&self, report: &VerifyReport) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from_string("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_string("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_string("csv").is_err());
    }

    #[test]
    fn test_digest_report_hex_encodes() {
        let report = DigestReport::new(&[0xde, 0xad, 0xbe, 0xef], Some(&[0x00, 0xff]), 3);

        assert_eq!(report.digest, "deadbeef");
        assert_eq!(report.salt.as_deref(), Some("00ff"));
        assert_eq!(report.iterations, 3);
    }

    #[test]
    fn test_salt_report() {
        let report = SaltReport::new(&[1, 2, 3]);
        assert_eq!(report.salt, "010203");
        assert_eq!(report.length, 3);
    }
}
