use super::{DigestReport, OutputFormatter, SaltReport, VerifyReport};
use anyhow::Result;
use colored::*;

/// Text formatter for human-readable output
pub struct TextFormatter {
    use_color: bool,
}

impl TextFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn colorize(&self, text: &str, color: fn(&str) -> ColoredString) -> String {
        if self.use_color {
            color(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format_digest(&self, report: &DigestReport) -> Result<String> {
        let mut output = String::new();

        let label = self.colorize("SHA1", |s| s.yellow());
        output.push_str(&format!("{label}: {}\n", self.colorize(&report.digest, |s| s.cyan())));

        match report.salt.as_deref() {
            Some("") => output.push_str("Salt: (empty)\n"),
            Some(salt) => output.push_str(&format!("Salt: {salt}\n")),
            None => {}
        }
        output.push_str(&format!("Iterations: {}\n", report.iterations));

        Ok(output)
    }

    fn format_salt(&self, report: &SaltReport) -> Result<String> {
        Ok(format!("{}\n", report.salt))
    }

    fn format_verify(&self, report: &VerifyReport) -> Result<String> {
        let verdict = if report.matches {
            self.colorize("OK", |s| s.green())
        } else {
            self.colorize("MISMATCH", |s| s.red())
        };
        Ok(format!("{verdict}\n"))
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn render<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        let mut rendered = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        rendered.push('\n');
        Ok(rendered)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_digest(&self, report: &DigestReport) -> Result<String> {
        self.render(report)
    }

    fn format_salt(&self, report: &SaltReport) -> Result<String> {
        self.render(report)
    }

    fn format_verify(&self, report: &VerifyReport) -> Result<String> {
        self.render(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn sample_report() -> DigestReport {
        DigestReport::new(&[0xa9, 0x99, 0x3e], Some(&[0x01, 0x02]), 2)
    }

    #[test]
    fn test_text_formatter_plain() {
        let output = TextFormatter::new(false)
            .format_digest(&sample_report())
            .unwrap();

        assert_eq!(output, "SHA1: a9993e\nSalt: 0102\nIterations: 2\n");
    }

    #[test]
    fn test_text_formatter_omits_absent_salt() {
        let report = DigestReport::new(&[0xff], None, 1);
        let output = TextFormatter::new(false).format_digest(&report).unwrap();

        assert!(!output.contains("Salt:"));
        assert!(output.contains("SHA1: ff"));
    }

    #[test]
    fn test_text_formatter_marks_empty_salt() {
        let report = DigestReport::new(&[0xff], Some(&[]), 1);
        let output = TextFormatter::new(false).format_digest(&report).unwrap();

        assert_eq!(output, "SHA1: ff\nSalt: (empty)\nIterations: 1\n");
    }

    #[test]
    fn test_text_formatter_verify() {
        let formatter = TextFormatter::new(false);
        let ok = VerifyReport {
            matches: true,
            iterations: 1,
        };
        let mismatch = VerifyReport {
            matches: false,
            iterations: 1,
        };

        assert_eq!(formatter.format_verify(&ok).unwrap(), "OK\n");
        assert_eq!(formatter.format_verify(&mismatch).unwrap(), "MISMATCH\n");
    }

    #[test]
    fn test_json_formatter_digest() {
        let output = JsonFormatter::new(false)
            .format_digest(&sample_report())
            .unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["algorithm"], "sha1");
        assert_eq!(value["digest"], "a9993e");
        assert_eq!(value["salt"], "0102");
        assert_eq!(value["iterations"], 2);
    }

    #[test]
    fn test_json_formatter_null_salt() {
        let report = DigestReport::new(&[0x00], None, 1);
        let output = JsonFormatter::new(true).format_digest(&report).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert!(value["salt"].is_null());
    }

    #[test]
    fn test_json_formatter_salt() {
        let output = JsonFormatter::new(false)
            .format_salt(&SaltReport::new(&[0xab, 0xcd]))
            .unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["salt"], "abcd");
        assert_eq!(value["length"], 2);
    }
}
