//! Where the bytes to hash come from

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use saltdigest_core::error::ValidationError;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Input source for the hash and verify commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Text(String),
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// Pick the source from the command line; stdin is used when neither is given
    pub fn from_args(text: Option<String>, file: Option<PathBuf>) -> Self {
        match (text, file) {
            (Some(text), _) => Self::Text(text),
            (None, Some(path)) => Self::File(path),
            (None, None) => Self::Stdin,
        }
    }

    /// Read the input bytes
    ///
    /// Text is hashed as its UTF-8 bytes. File and stdin contents are hashed
    /// verbatim.
    pub fn read(&self) -> Result<Vec<u8>> {
        match self {
            Self::Text(text) => Ok(text.as_bytes().to_vec()),
            Self::File(path) => {
                log::debug!("Reading input from {}", path.display());
                fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
            }
            Self::Stdin => {
                let mut stdin = io::stdin();
                if stdin.is_terminal() {
                    anyhow::bail!("No input given: pass TEXT, --file, or pipe data on stdin");
                }
                let mut buffer = Vec::new();
                stdin
                    .read_to_end(&mut buffer)
                    .context("Failed to read stdin")?;
                Ok(buffer)
            }
        }
    }
}

/// Decode a hex-encoded salt or digest from the command line
pub fn decode_hex(parameter: &str, value: &str) -> Result<Vec<u8>> {
    hex::decode(value.trim()).map_err(|e| {
        ValidationError::invalid_encoding(format!("{parameter} is not valid hex: {e}")).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_source_precedence() {
        assert_eq!(
            InputSource::from_args(Some("abc".into()), None),
            InputSource::Text("abc".into())
        );
        assert_eq!(
            InputSource::from_args(None, Some(PathBuf::from("x.bin"))),
            InputSource::File(PathBuf::from("x.bin"))
        );
        assert_eq!(InputSource::from_args(None, None), InputSource::Stdin);
    }

    #[test]
    fn test_text_is_utf8_bytes() {
        let bytes = InputSource::Text("é".into()).read().unwrap();
        assert_eq!(bytes, vec![0xc3, 0xa9]);
    }

    #[test]
    fn test_file_read_verbatim() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0, 1, 2, 255]).unwrap();

        let bytes = InputSource::File(file.path().to_path_buf()).read().unwrap();
        assert_eq!(bytes, vec![0, 1, 2, 255]);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let error = InputSource::File(PathBuf::from("/definitely/not/here.bin"))
            .read()
            .unwrap_err();
        assert!(error.to_string().contains("/definitely/not/here.bin"));
    }

    #[test]
    fn test_decode_hex() {
        assert_eq!(decode_hex("salt", "00ff10").unwrap(), vec![0x00, 0xff, 0x10]);
        assert_eq!(decode_hex("salt", " ABCD \n").unwrap(), vec![0xab, 0xcd]);
        assert_eq!(decode_hex("salt", "").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_hex_rejects_garbage() {
        let error = decode_hex("salt", "xyz").unwrap_err();
        assert!(error.to_string().contains("salt is not valid hex"));
    }
}
