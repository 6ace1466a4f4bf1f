//! Input file and output directory checks

use std::path::Path;

use tracing::warn;
use vcf_model::sanitize_component;

use crate::engine::Strictness;
use crate::{Error, Result};

/// Check that `path` is an existing regular file that looks like CSV
///
/// # Errors
///
/// Fails when the path is missing or not a file. A missing `.csv`
/// extension only fails in strict mode.
pub fn check_csv_file(path: &Path, strictness: Strictness) -> Result<()> {
    if !path.exists() {
        return Err(Error::validation(format!(
            "CSV file not found: {}",
            path.display()
        )));
    }

    if !path.is_file() {
        return Err(Error::validation(format!(
            "Path is not a file: {}",
            path.display()
        )));
    }

    let has_csv_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !has_csv_extension {
        let message = format!("File does not have .csv extension: {}", path.display());
        if strictness.is_strict() {
            return Err(Error::validation(message));
        }
        warn!("{message}");
    }

    Ok(())
}

/// Check that `path` is either absent or a directory
///
/// # Errors
///
/// Fails when something other than a directory already occupies the path.
pub fn check_output_directory(path: &Path) -> Result<()> {
    if path.exists() && !path.is_dir() {
        return Err(Error::validation(format!(
            "Output path exists but is not a directory: {}",
            path.display()
        )));
    }
    Ok(())
}

/// Sanitize a single filename part, never returning an empty string
#[must_use]
pub fn sanitize_filename_part(name: &str) -> String {
    let cleaned = sanitize_component(name);
    if cleaned.is_empty() {
        "unknown".to_string()
    } else {
        cleaned
    }
}
