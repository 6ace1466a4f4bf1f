#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # vcf-model
//!
//! Canonical contact record and the vCard output types shared by every
//! stage of the conversion.
//!
//! A [`Contact`] has a fixed schema of string fields. Empty string is the
//! only representation of "absent"; there are no optional fields.

/// Contact record behaviour: construction, naming, identifiers.
pub mod contact;
/// Filename sanitizing helpers.
pub mod filename;
/// Serialized vCard output handed from the serializer to export.
pub mod output;
/// Field enumeration and the generated contact struct.
pub mod schema;
/// Supported vCard versions.
pub mod version;

pub use contact::FieldMap;
pub use filename::sanitize_component;
pub use output::VCardOutput;
pub use schema::{Contact, ContactField};
pub use version::VCardVersion;

use thiserror::Error;

/// Errors raised while interpreting model values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown contact field: {0}")]
    UnknownField(String),

    #[error("Invalid vCard version '{0}'. Use 3.0 or 4.0.")]
    InvalidVersion(String),
}

impl Error {
    /// Build an unknown-field error.
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField(name.into())
    }

    /// Build an invalid-version error.
    pub fn invalid_version(value: impl Into<String>) -> Self {
        Self::InvalidVersion(value.into())
    }
}

/// Crate-local result type for model operations.
pub type Result<T> = std::result::Result<T, Error>;
