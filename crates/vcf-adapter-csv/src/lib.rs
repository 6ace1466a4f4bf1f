//! # vcf-adapter-csv
//!
//! CSV adapter for reading contact rows.
//!
//! Files are decoded (auto-detected or caller-chosen encoding), tokenized
//! with the `csv` crate, mapped onto canonical contact fields and validated
//! row by row.
//!
//! ## Example Usage
//!
//! ```rust
//! use vcf_adapter_csv::{CsvConfig, CsvReader};
//! use vcf_model::ContactField;
//!
//! let reader = CsvReader::new().with_config(CsvConfig::new().delimiter(";"));
//! let rows = reader.read_str("Surname;First\nGump;Forrest\n").unwrap();
//!
//! assert_eq!(rows[0][&ContactField::LastName], "Gump");
//! ```

pub mod config;
pub mod encoding;
pub mod errors;
pub mod reader;

// Re-export main types
pub use config::CsvConfig;
pub use encoding::{DefaultEncodingDetector, EncodingDetector};
pub use errors::{CsvError, CsvResult};
pub use reader::{ContactIter, CsvReader, ReadReport, find_csv_files};

pub use errors::CsvError as Error;
pub type Result<T> = CsvResult<T>;
