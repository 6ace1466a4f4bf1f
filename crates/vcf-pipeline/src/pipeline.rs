//! Pipeline orchestration
//!
//! This module provides the main Pipeline: find CSV files, read and
//! validate their rows, serialize every contact and export the results.

use std::path::{Path, PathBuf};

use tracing::{info, warn};
use vcf_adapter_csv::{CsvConfig, CsvReader, find_csv_files};
use vcf_adapter_vcard::{serialize, serialize_fields};
use vcf_mapping::load_mapping;
use vcf_model::{Contact, VCardOutput, VCardVersion};
use vcf_validation::Strictness;

use crate::Result;
use crate::export::{SplitLimits, ensure_dir, write_combined, write_one, write_split};

/// How serialized contacts are laid out on disk
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One `<last>_<first>.vcf` file per contact
    #[default]
    PerContact,

    /// Every contact in one file
    Combined { file_name: String },

    /// Numbered `<base_name>_NNN.vcf` files bounded by `limits`
    Split {
        base_name: String,
        limits: SplitLimits,
    },
}

impl OutputMode {
    /// Combined output into `contacts.vcf`
    pub fn combined() -> Self {
        Self::Combined {
            file_name: "contacts.vcf".to_string(),
        }
    }

    /// Split output with the `contacts` base name
    pub fn split(limits: SplitLimits) -> Self {
        Self::Split {
            base_name: "contacts".to_string(),
            limits,
        }
    }
}

/// Configuration for the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// CSV field delimiter
    pub delimiter: String,
    /// Forced input encoding; detected when `None`
    pub encoding: Option<String>,
    /// Mapping override file layered over the default aliases
    pub mapping_file: Option<PathBuf>,
    /// vCard version to emit
    pub version: VCardVersion,
    /// Whether row problems abort the run
    pub strictness: Strictness,
    /// Directory receiving the vCard files
    pub output_dir: PathBuf,
    pub output_mode: OutputMode,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            delimiter: ",".to_string(),
            encoding: None,
            mapping_file: None,
            version: VCardVersion::default(),
            strictness: Strictness::default(),
            output_dir: PathBuf::from("export"),
            output_mode: OutputMode::default(),
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    #[must_use]
    pub fn encoding(mut self, encoding: Option<String>) -> Self {
        self.encoding = encoding;
        self
    }

    #[must_use]
    pub fn mapping_file(mut self, path: Option<PathBuf>) -> Self {
        self.mapping_file = path;
        self
    }

    #[must_use]
    pub fn version(mut self, version: VCardVersion) -> Self {
        self.version = version;
        self
    }

    #[must_use]
    pub fn strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    #[must_use]
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    #[must_use]
    pub fn output_mode(mut self, mode: OutputMode) -> Self {
        self.output_mode = mode;
        self
    }

    fn csv_config(&self) -> CsvConfig {
        let config = CsvConfig::new()
            .delimiter(self.delimiter.clone())
            .strictness(self.strictness);
        match &self.encoding {
            Some(label) => config.encoding(label.clone()),
            None => config,
        }
    }
}

/// Statistics for one run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PipelineStats {
    /// CSV files read
    pub files_read: usize,
    /// Contacts parsed from accepted rows
    pub contacts_parsed: usize,
    /// Contacts that produced validation warnings
    pub contacts_with_warnings: usize,
    /// Rows dropped for a column-count mismatch
    pub rows_skipped: usize,
    /// vCard files written
    pub files_written: usize,
}

/// Main pipeline converting CSV contacts to vCard files
#[derive(Debug, Default)]
pub struct Pipeline {
    config: PipelineConfig,
    stats: PipelineStats,
}

impl Pipeline {
    /// Create a new pipeline with the given configuration
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            stats: PipelineStats::default(),
        }
    }

    /// Create a pipeline with default configuration
    pub fn with_defaults() -> Self {
        Self::new(PipelineConfig::default())
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Statistics of the most recent run
    pub fn stats(&self) -> &PipelineStats {
        &self.stats
    }

    /// Convert a CSV file, or every `*.csv` file in a directory
    ///
    /// Returns the paths written, in order.
    ///
    /// # Errors
    ///
    /// Fails on unusable configuration, a missing or bad mapping file, an
    /// unusable output directory, export failures, and in strict mode on
    /// any file or row problem.
    pub fn run(&mut self, source: &Path) -> Result<Vec<PathBuf>> {
        self.stats = PipelineStats::default();
        info!(source = %source.display(), version = %self.config.version, "Converting CSV to vCard");

        let files = find_csv_files(source)?;
        let mapping = load_mapping(self.config.mapping_file.as_deref())?;
        let output_dir = ensure_dir(&self.config.output_dir)?;

        let reader = CsvReader::new()
            .with_config(self.config.csv_config())
            .with_mapping(mapping);

        let mut outputs = Vec::new();
        for file in &files {
            let report = reader.read_report(file)?;
            self.stats.files_read += 1;
            self.stats.contacts_parsed += report.rows.len();
            self.stats.contacts_with_warnings += report.warned_rows;
            self.stats.rows_skipped += report.skipped_rows;

            outputs.extend(
                report
                    .rows
                    .iter()
                    .map(|fields| serialize_fields(fields, self.config.version)),
            );
        }

        let written = self.export(&outputs, &output_dir)?;
        self.stats.files_written = written.len();

        if written.is_empty() {
            warn!(source = %source.display(), "No vCard files were created");
        } else {
            info!(
                files = written.len(),
                contacts = outputs.len(),
                "Created vCard files"
            );
        }
        Ok(written)
    }

    fn export(&self, outputs: &[VCardOutput], output_dir: &Path) -> Result<Vec<PathBuf>> {
        match &self.config.output_mode {
            OutputMode::PerContact => outputs
                .iter()
                .map(|output| write_one(output, output_dir))
                .collect(),
            OutputMode::Combined { .. } if outputs.is_empty() => Ok(Vec::new()),
            OutputMode::Combined { file_name } => {
                Ok(vec![write_combined(outputs, &output_dir.join(file_name))?])
            }
            OutputMode::Split { base_name, limits } => {
                write_split(outputs, output_dir, base_name, *limits)
            }
        }
    }

    /// Write the built-in sample contact to the output directory
    ///
    /// # Errors
    ///
    /// Fails when the output directory is unusable or the write fails.
    pub fn write_sample(&self) -> Result<(VCardOutput, PathBuf)> {
        let output_dir = ensure_dir(&self.config.output_dir)?;
        let output = serialize(&sample_contact(), self.config.version);
        let path = write_one(&output, &output_dir)?;
        Ok((output, path))
    }
}

/// The Forrest Gump sample contact
#[must_use]
pub fn sample_contact() -> Contact {
    Contact::from_pairs([
        ("last_name", "Gump"),
        ("first_name", "Forrest"),
        ("title", "Shrimp Man"),
        ("org", "Bubba Gump Shrimp Co."),
        ("phone", "+49 170 5 25 25 25"),
        ("email", "forrestgump@example.com"),
        ("website", "https://www.linkedin.com/in/forrestgump"),
        ("street", "42 Plantation St."),
        ("city", "Baytown"),
        ("p_code", "30314"),
        ("country", "United States of America"),
    ])
}
