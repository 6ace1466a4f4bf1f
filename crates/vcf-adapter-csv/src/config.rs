//! CSV configuration options

use vcf_validation::Strictness;

use crate::errors::{CsvError, CsvResult};

/// Configuration for reading contact CSV files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvConfig {
    /// Field delimiter: one ASCII character, or `tab` / `\t` (default: comma)
    pub delimiter: String,
    /// Encoding label such as `utf-8` or `latin1` (default: auto-detect)
    pub encoding: Option<String>,
    /// How row problems are handled (default: permissive)
    pub strictness: Strictness,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ",".to_string(),
            encoding: None,
            strictness: Strictness::Permissive,
        }
    }
}

impl CsvConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delimiter
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Force an encoding instead of detecting one
    pub fn encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = Some(label.into());
        self
    }

    /// Set strictness
    pub fn strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Convert the delimiter to a byte for the csv crate
    pub fn delimiter_u8(&self) -> CsvResult<u8> {
        match self.delimiter.as_str() {
            "tab" | "\\t" | "\t" => return Ok(b'\t'),
            _ => {}
        }

        let mut chars = self.delimiter.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii() => Ok(c as u8),
            _ => Err(CsvError::config(format!(
                "Delimiter must be a single ASCII character or 'tab', got '{}'",
                self.delimiter
            ))),
        }
    }
}
