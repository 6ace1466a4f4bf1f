#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # vcf-validation
//!
//! Semantic checks for resolved contact fields, plus the input-file and
//! output-directory checks used by ingestion and export.
//!
//! Contact checks produce warnings. Under [`Strictness::Strict`] a missing
//! or blank required field becomes an error instead.
//!
//! ## Example Usage
//!
//! ```rust
//! use vcf_model::{ContactField, FieldMap};
//! use vcf_validation::{Strictness, check_contact};
//!
//! let mut fields = FieldMap::new();
//! fields.insert(ContactField::Title, "Boss".to_string());
//!
//! let warnings = check_contact(&fields, Strictness::Permissive).unwrap();
//! assert!(warnings.iter().any(|w| w.contains("required")));
//! assert!(check_contact(&fields, Strictness::Strict).is_err());
//! ```

pub mod engine;
pub mod files;
pub mod rules;

pub use engine::{Strictness, check_contact};
pub use files::{check_csv_file, check_output_directory, sanitize_filename_part};
pub use rules::{validate_email, validate_gender, validate_geo};

use thiserror::Error;

/// Errors that can occur during validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl Error {
    /// Build a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// The message without the "Validation failed" prefix
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(message) => message,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
