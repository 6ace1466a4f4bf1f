//! Sandboxed vCard export
//!
//! Every per-contact and split file is resolved against its base directory
//! and rejected unless it stays inside it. The lexical check runs before
//! anything touches the filesystem; a canonical check after the directory
//! exists catches symlinks.

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, info};
use vcf_model::VCardOutput;
use vcf_validation::check_output_directory;

use crate::{Error, Result};

/// Bounds for one split file; at least one must be set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplitLimits {
    /// Maximum UTF-8 bytes per file
    pub max_bytes: Option<usize>,
    /// Maximum contacts per file
    pub max_count: Option<usize>,
}

impl SplitLimits {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = Some(max_bytes);
        self
    }

    #[must_use]
    pub fn max_count(mut self, max_count: usize) -> Self {
        self.max_count = Some(max_count);
        self
    }

    /// Check that a limit is set and none is zero
    ///
    /// # Errors
    ///
    /// Returns [`Error::Usage`] otherwise.
    pub fn validate(&self) -> Result<()> {
        if self.max_bytes.is_none() && self.max_count.is_none() {
            return Err(Error::usage(
                "Split export needs a maximum byte size or contact count",
            ));
        }
        if self.max_bytes == Some(0) || self.max_count == Some(0) {
            return Err(Error::usage("Split limits must be greater than zero"));
        }
        Ok(())
    }

    /// Whether `next` bytes must start a new file after a chunk of
    /// `chunk_bytes` bytes holding `chunk_count` contacts
    fn starts_new_chunk(&self, chunk_bytes: usize, chunk_count: usize, next: usize) -> bool {
        let over_bytes = self
            .max_bytes
            .is_some_and(|max| chunk_count > 0 && chunk_bytes + next > max);
        let over_count = self.max_count.is_some_and(|max| chunk_count >= max);
        over_bytes || over_count
    }
}

/// Make sure `path` is a directory, creating it and its parents if needed
///
/// # Errors
///
/// Fails when something other than a directory occupies the path, or the
/// directory cannot be created.
pub fn ensure_dir(path: &Path) -> Result<PathBuf> {
    check_output_directory(path)?;
    fs::create_dir_all(path).map_err(|e| {
        Error::export("create directory", path.display().to_string(), e.to_string())
    })?;
    debug!(path = %path.display(), "Output directory ready");
    Ok(path.to_path_buf())
}

/// Write one contact to `base_dir/output.filename`
///
/// # Errors
///
/// Returns [`Error::Export`] for a filename escaping `base_dir` or any
/// I/O failure.
pub fn write_one(output: &VCardOutput, base_dir: &Path) -> Result<PathBuf> {
    let path = write_contained(base_dir, &output.filename, &output.text)?;
    info!(path = %path.display(), name = %output.name, "Created vCard");
    Ok(path)
}

/// Concatenate every output into the single file `path`
///
/// # Errors
///
/// Returns an error when the parent directory cannot be prepared or the
/// file cannot be written.
pub fn write_combined(outputs: &[VCardOutput], path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }

    let text: String = outputs.iter().map(|output| output.text.as_str()).collect();
    fs::write(path, text)
        .map_err(|e| Error::export("write", path.display().to_string(), e.to_string()))?;

    info!(path = %path.display(), contacts = outputs.len(), "Created combined vCard file");
    Ok(path.to_path_buf())
}

/// Write outputs into `dir/<base_name>_NNN.vcf` files bounded by `limits`
///
/// An empty input writes nothing.
///
/// # Errors
///
/// Returns [`Error::Usage`] for unusable limits, otherwise the first
/// export failure.
pub fn write_split(
    outputs: &[VCardOutput],
    dir: &Path,
    base_name: &str,
    limits: SplitLimits,
) -> Result<Vec<PathBuf>> {
    limits.validate()?;

    let mut written = Vec::new();
    let mut chunk = String::new();
    let mut chunk_count = 0;

    for output in outputs {
        if limits.starts_new_chunk(chunk.len(), chunk_count, output.byte_len()) {
            written.push(flush_chunk(dir, base_name, written.len() + 1, &chunk, chunk_count)?);
            chunk.clear();
            chunk_count = 0;
        }
        chunk.push_str(&output.text);
        chunk_count += 1;
    }

    if chunk_count > 0 {
        written.push(flush_chunk(dir, base_name, written.len() + 1, &chunk, chunk_count)?);
    }

    Ok(written)
}

fn flush_chunk(
    dir: &Path,
    base_name: &str,
    index: usize,
    text: &str,
    contacts: usize,
) -> Result<PathBuf> {
    let filename = format!("{base_name}_{index:03}.vcf");
    let path = write_contained(dir, &filename, text)?;
    info!(path = %path.display(), contacts, bytes = text.len(), "Created split vCard file");
    Ok(path)
}

fn write_contained(base_dir: &Path, filename: &str, text: &str) -> Result<PathBuf> {
    let (base, target) = resolve_contained(base_dir, filename)?;

    // The parent is base_dir or lies below it
    if let Some(parent) = target.parent() {
        ensure_dir(parent)?;
    }

    let canonical_base = canonicalize(&base)?;
    let canonical_parent = target.parent().map(canonicalize).transpose()?;
    if !canonical_parent.is_some_and(|parent| parent.starts_with(&canonical_base)) {
        return Err(traversal_error(&target, filename));
    }

    fs::write(&target, text)
        .map_err(|e| Error::export("write", target.display().to_string(), e.to_string()))?;

    // Report the path in the caller's form, relative when base_dir is
    Ok(match target.strip_prefix(&base) {
        Ok(relative) => base_dir.join(relative),
        Err(_) => target,
    })
}

/// Absolute, normalized base directory and target path
fn resolve_contained(base_dir: &Path, filename: &str) -> Result<(PathBuf, PathBuf)> {
    let name = Path::new(filename);
    if name.has_root() || name.is_absolute() {
        return Err(traversal_error(base_dir, filename));
    }

    let base = std::path::absolute(base_dir).map_err(|e| {
        Error::export("resolve", base_dir.display().to_string(), e.to_string())
    })?;
    let base = normalize(&base);
    let target = normalize(&base.join(name));

    if target == base || !target.starts_with(&base) {
        return Err(traversal_error(&target, filename));
    }
    Ok((base, target))
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

fn canonicalize(path: &Path) -> Result<PathBuf> {
    path.canonicalize()
        .map_err(|e| Error::export("resolve", path.display().to_string(), e.to_string()))
}

fn traversal_error(path: &Path, filename: &str) -> Error {
    Error::export(
        "write",
        path.display().to_string(),
        format!("Security error: attempted path traversal in filename '{filename}'"),
    )
}
