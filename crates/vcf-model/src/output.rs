//! Serialized vCard output

use crate::VCardVersion;

/// One serialized contact, ready for export
///
/// Built per contact by the serializer and consumed immediately by export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardOutput {
    /// Sanitized `<last>_<first>.vcf` file name
    pub filename: String,
    /// Wire-format text, newline-terminated
    pub text: String,
    /// Display name used in log messages
    pub name: String,
    /// Version the text was produced for
    pub version: VCardVersion,
}

impl VCardOutput {
    /// Create an output record
    pub fn new(
        filename: impl Into<String>,
        text: impl Into<String>,
        name: impl Into<String>,
        version: VCardVersion,
    ) -> Self {
        Self {
            filename: filename.into(),
            text: text.into(),
            name: name.into(),
            version,
        }
    }

    /// Size of the text in UTF-8 bytes
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.text.len()
    }
}
