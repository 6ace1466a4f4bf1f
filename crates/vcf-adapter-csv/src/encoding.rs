//! Text encoding detection and decoding

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use tracing::{debug, warn};

use crate::errors::{CsvError, CsvResult};

/// Guesses the encoding label of raw file bytes
pub trait EncodingDetector: Send + Sync {
    /// Return an encoding label, or `None` when undecided
    fn detect(&self, bytes: &[u8]) -> Option<String>;
}

impl<F> EncodingDetector for F
where
    F: Fn(&[u8]) -> Option<String> + Send + Sync,
{
    fn detect(&self, bytes: &[u8]) -> Option<String> {
        self(bytes)
    }
}

/// BOM sniffing, then UTF-8 validity, then windows-1252
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEncodingDetector;

impl EncodingDetector for DefaultEncodingDetector {
    fn detect(&self, bytes: &[u8]) -> Option<String> {
        if let Some((encoding, _)) = Encoding::for_bom(bytes) {
            return Some(encoding.name().to_string());
        }
        if std::str::from_utf8(bytes).is_ok() {
            return Some(UTF_8.name().to_string());
        }
        Some(WINDOWS_1252.name().to_string())
    }
}

/// Pick the encoding for `bytes`
///
/// A caller-supplied label wins. Otherwise the detector is asked, and an
/// unrecognized or missing answer falls back to UTF-8.
pub fn resolve_encoding(
    label: Option<&str>,
    detector: &dyn EncodingDetector,
    bytes: &[u8],
) -> CsvResult<&'static Encoding> {
    if let Some(label) = label {
        return Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| CsvError::config(format!("Unknown encoding '{label}'")));
    }

    let detected = detector.detect(bytes);
    let encoding = detected
        .as_deref()
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8);
    debug!(detected = ?detected, encoding = encoding.name(), "Detected encoding");
    Ok(encoding)
}

/// Decode `bytes`, replacing malformed sequences
///
/// A leading BOM is stripped and takes precedence over `encoding`.
pub fn decode(bytes: &[u8], encoding: &'static Encoding, source: &str) -> String {
    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        warn!(
            source,
            encoding = used.name(),
            "Invalid byte sequences replaced while decoding"
        );
    }
    text.into_owned()
}
