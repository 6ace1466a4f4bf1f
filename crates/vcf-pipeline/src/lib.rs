#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # vcf-pipeline
//!
//! CSV-to-vCard orchestration and sandboxed file export.
//!
//! This crate wires ingestion, serialization and export together and owns
//! the error type every lower crate's error converges into.

pub mod export;
pub mod pipeline;

pub use export::{SplitLimits, ensure_dir, write_combined, write_one, write_split};
pub use pipeline::{OutputMode, Pipeline, PipelineConfig, PipelineStats, sample_contact};

use thiserror::Error;
use vcf_adapter_csv::CsvError;

/// Errors that can occur in the pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Bad input shape: files, required fields, output directory, mapping
    #[error("Validation error: {0}")]
    Validation(String),

    /// Structurally broken CSV
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Export error during {operation} for '{path}': {message}")]
    Export {
        operation: String,
        path: String,
        message: String,
    },

    /// Missing split limit, bad delimiter or unknown encoding
    #[error("Usage error: {0}")]
    Usage(String),
}

impl Error {
    /// Create a structured export error with operation/path context.
    pub fn export(
        operation: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Export {
            operation: operation.into(),
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }
}

impl From<CsvError> for Error {
    fn from(e: CsvError) -> Self {
        match e {
            CsvError::Validation(message) => Self::Validation(message),
            CsvError::Config(message) => Self::Usage(message),
            CsvError::Parse { .. } | CsvError::Io(_) => Self::Parse(e.to_string()),
        }
    }
}

impl From<vcf_validation::Error> for Error {
    fn from(e: vcf_validation::Error) -> Self {
        Self::Validation(e.message().to_string())
    }
}

impl From<vcf_mapping::Error> for Error {
    fn from(e: vcf_mapping::Error) -> Self {
        Self::Validation(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
