//! CSV reader

use std::fmt;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};
use vcf_mapping::FieldMapping;
use vcf_model::{Contact, FieldMap};
use vcf_validation::{check_contact, check_csv_file};

use crate::config::CsvConfig;
use crate::encoding::{DefaultEncodingDetector, EncodingDetector, decode, resolve_encoding};
use crate::errors::{CsvError, CsvResult};

/// Rows accepted from one CSV source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadReport {
    /// Mapped fields of every accepted row, in file order
    pub rows: Vec<FieldMap>,
    /// Accepted rows that produced validation warnings
    pub warned_rows: usize,
    /// Rows dropped for a column-count mismatch
    pub skipped_rows: usize,
}

/// Reader turning contact CSV files into canonical field maps
pub struct CsvReader {
    config: CsvConfig,
    mapping: FieldMapping,
    detector: Box<dyn EncodingDetector>,
}

impl CsvReader {
    /// Create a new CSV reader with the default mapping
    pub fn new() -> Self {
        Self {
            config: CsvConfig::default(),
            mapping: FieldMapping::default(),
            detector: Box::new(DefaultEncodingDetector),
        }
    }

    /// Set configuration
    pub fn with_config(mut self, config: CsvConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the column mapping
    pub fn with_mapping(mut self, mapping: FieldMapping) -> Self {
        self.mapping = mapping;
        self
    }

    /// Replace the encoding detector
    pub fn with_detector(mut self, detector: impl EncodingDetector + 'static) -> Self {
        self.detector = Box::new(detector);
        self
    }

    pub fn config(&self) -> &CsvConfig {
        &self.config
    }

    /// Read a CSV file into field maps, one per accepted row
    ///
    /// In permissive mode a missing file or broken CSV is logged and yields
    /// an empty result.
    pub fn read_path(&self, path: &Path) -> CsvResult<Vec<FieldMap>> {
        self.read_report(path).map(|report| report.rows)
    }

    /// Like [`CsvReader::read_path`], also counting warned and skipped rows
    pub fn read_report(&self, path: &Path) -> CsvResult<ReadReport> {
        let strict = self.config.strictness.is_strict();
        let source = path.display().to_string();

        if let Err(e) = check_csv_file(path, self.config.strictness) {
            if strict {
                return Err(e.into());
            }
            error!(path = %source, error = %e, "Skipping CSV file");
            return Ok(ReadReport::default());
        }

        let delimiter = self.config.delimiter_u8()?;
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => return self.parse_failure(&source, 0, e.to_string()),
        };

        let encoding = resolve_encoding(
            self.config.encoding.as_deref(),
            &*self.detector,
            &bytes,
        )?;
        let text = decode(&bytes, encoding, &source);

        info!(path = %source, encoding = encoding.name(), "Reading CSV file");
        self.parse(text.as_bytes(), delimiter, &source)
    }

    /// Read already-decoded CSV text
    pub fn read_str(&self, text: &str) -> CsvResult<Vec<FieldMap>> {
        let delimiter = self.config.delimiter_u8()?;
        self.parse(text.as_bytes(), delimiter, "<memory>")
            .map(|report| report.rows)
    }

    /// Read a CSV file and yield one contact per accepted row
    pub fn contacts(&self, path: &Path) -> CsvResult<ContactIter> {
        Ok(ContactIter {
            rows: self.read_path(path)?.into_iter(),
        })
    }

    fn parse<R: Read>(&self, input: R, delimiter: u8, source: &str) -> CsvResult<ReadReport> {
        let strictness = self.config.strictness;
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(delimiter)
            .from_reader(input);
        let mut records = csv_reader.records();

        let header: Vec<String> = match records.next() {
            Some(Ok(record)) => record.iter().map(|cell| cell.trim().to_string()).collect(),
            Some(Err(e)) => return self.parse_failure(source, error_line(&e), e.to_string()),
            None => {
                if strictness.is_strict() {
                    return Err(CsvError::parse(0, format!("CSV file is empty: {source}")));
                }
                warn!(source, "CSV file is empty");
                return Ok(ReadReport::default());
            }
        };
        debug!(source, columns = header.len(), "Parsed header");

        let mut report = ReadReport::default();
        for (index, record) in records.enumerate() {
            let row = index + 2;
            let record = match record {
                Ok(record) => record,
                Err(e) => return self.parse_failure(source, error_line(&e), e.to_string()),
            };

            if record.len() != header.len() {
                warn!(
                    source,
                    row,
                    expected = header.len(),
                    actual = record.len(),
                    "Column count mismatch, skipping row"
                );
                report.skipped_rows += 1;
                continue;
            }

            let fields = self
                .mapping
                .resolve(header.iter().map(String::as_str).zip(record.iter()));
            let warnings = check_contact(&fields, strictness)
                .map_err(|e| CsvError::validation(format!("Row {row}: {}", e.message())))?;
            for warning in &warnings {
                warn!(source, row, "{warning}");
            }
            if !warnings.is_empty() {
                report.warned_rows += 1;
            }

            report.rows.push(fields);
        }

        info!(
            source,
            rows = report.rows.len(),
            skipped = report.skipped_rows,
            "Parsed contact rows"
        );
        Ok(report)
    }

    fn parse_failure(&self, source: &str, line: usize, message: String) -> CsvResult<ReadReport> {
        if self.config.strictness.is_strict() {
            return Err(CsvError::parse(line, message));
        }
        error!(source, line, %message, "Error parsing CSV file");
        Ok(ReadReport::default())
    }
}

impl Default for CsvReader {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CsvReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CsvReader")
            .field("config", &self.config)
            .field("mapping", &self.mapping)
            .finish_non_exhaustive()
    }
}

/// Contacts built from the rows of one CSV file
#[derive(Debug)]
pub struct ContactIter {
    rows: std::vec::IntoIter<FieldMap>,
}

impl Iterator for ContactIter {
    type Item = Contact;

    fn next(&mut self) -> Option<Self::Item> {
        self.rows.next().map(|fields| Contact::from_fields(&fields))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

/// Resolve `source` to the CSV files it names
///
/// A directory yields its `*.csv` files in sorted order; any other path is
/// returned unchanged and checked when read.
pub fn find_csv_files(source: &Path) -> CsvResult<Vec<PathBuf>> {
    if !source.is_dir() {
        return Ok(vec![source.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(source)? {
        let path = entry?.path();
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv && path.is_file() {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(CsvError::validation(format!(
            "No CSV files found in directory: {}",
            source.display()
        )));
    }

    files.sort();
    info!(directory = %source.display(), count = files.len(), "Found CSV files");
    Ok(files)
}

fn error_line(e: &csv::Error) -> usize {
    e.position().map_or(0, |position| {
        usize::try_from(position.line()).unwrap_or(usize::MAX)
    })
}
