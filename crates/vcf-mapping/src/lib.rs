//! # vcf-mapping
//!
//! Resolves arbitrary CSV column names to canonical contact fields.
//!
//! The default alias table is static. A mapping file overlays it field by
//! field, producing a fresh [`FieldMapping`] per invocation.
//!
//! ## Example Usage
//!
//! ```rust
//! use vcf_mapping::FieldMapping;
//! use vcf_model::ContactField;
//!
//! let mapping = FieldMapping::default();
//! let fields = mapping.resolve([("Surname", "Gump"), ("First", "Forrest")]);
//!
//! assert_eq!(fields[&ContactField::LastName], "Gump");
//! assert_eq!(fields[&ContactField::FirstName], "Forrest");
//! ```

pub mod defaults;
pub mod loader;
pub mod mapping;

pub use loader::{EXAMPLE_MAPPING_JSON, load_mapping, load_mapping_file, parse_mapping};
pub use mapping::FieldMapping;

use thiserror::Error;

/// Errors that can occur while loading a mapping
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Mapping file not found: {path}")]
    NotFound { path: String },

    #[error("Invalid mapping file '{path}': {message}")]
    Parse { path: String, message: String },

    #[error("Invalid mapping: {0}")]
    Invalid(String),
}

impl Error {
    /// Build a parse error for a mapping file.
    pub fn parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Build a structural mapping error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
