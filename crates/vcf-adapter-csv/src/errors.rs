//! Error types for the CSV adapter

use thiserror::Error;

/// Errors that can occur when reading contact CSV
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CsvError {
    /// Input file or contact failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Structurally broken CSV
    #[error("CSV parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// I/O error
    #[error("IO error: {0}")]
    Io(String),

    /// Bad delimiter or encoding label
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CsvError {
    /// Create a parse error at a specific line (0 when unknown)
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Get the line number if available
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Self::Parse { line, .. } if *line > 0 => Some(*line),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CsvError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<vcf_validation::Error> for CsvError {
    fn from(e: vcf_validation::Error) -> Self {
        Self::Validation(e.message().to_string())
    }
}

/// Result type alias for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_line() {
        let err = CsvError::parse(5, "unequal lengths");
        assert!(err.to_string().contains("line 5"));
        assert_eq!(err.line_number(), Some(5));
        assert_eq!(CsvError::parse(0, "empty").line_number(), None);
    }

    #[test]
    fn test_from_validation_error() {
        let err: CsvError = vcf_validation::Error::validation("CSV file not found: x.csv").into();
        assert_eq!(err, CsvError::Validation("CSV file not found: x.csv".to_string()));
        assert_eq!(err.line_number(), None);
    }

    #[test]
    fn test_from_io_error() {
        let err: CsvError = std::io::Error::other("disk gone").into();
        assert!(err.to_string().contains("disk gone"));
    }
}
