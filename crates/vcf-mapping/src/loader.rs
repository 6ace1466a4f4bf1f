//! Mapping file loading
//!
//! A mapping file is a JSON (or YAML) object keyed by canonical field name.
//! Each value is a single column name or a list of them:
//!
//! ```json
//! { "last_name": ["Surname", "Family Name"], "email": "E-Mail" }
//! ```

use std::path::Path;

use serde_json::Value;
use tracing::{debug, info, warn};
use vcf_model::ContactField;

use crate::mapping::FieldMapping;
use crate::{Error, Result};

/// Example override file printed by the `mapping` command
pub const EXAMPLE_MAPPING_JSON: &str = r#"{
  "first_name": ["First Name", "Given Name", "FirstName"],
  "last_name": ["Last Name", "Surname", "FamilyName"],
  "email": ["Email", "E-Mail", "email_address"],
  "phone": ["Phone", "Mobile", "Tel", "Telephone"],
  "org": ["Company", "Organization", "Employer"],
  "title": ["Job Title", "Position", "Title"],
  "street": ["Address", "Street", "Street Address"],
  "city": ["City", "Town", "Locality"],
  "region": ["State", "Province", "Region"],
  "p_code": ["Zip", "Postal Code", "ZIP Code", "Postcode"],
  "country": ["Country", "Nation"],
  "birthday": ["Birthday", "Birth Date", "DOB"],
  "note": ["Notes", "Comments", "Remarks"]
}"#;

/// Syntax of a mapping document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MappingFormat {
    Json,
    Yaml,
}

impl MappingFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                MappingFormat::Yaml
            }
            _ => MappingFormat::Json,
        }
    }
}

/// Load the effective mapping: the default table, overlaid by `path` if given
///
/// # Errors
///
/// Returns an error when the file is missing or malformed.
pub fn load_mapping(path: Option<&Path>) -> Result<FieldMapping> {
    match path {
        Some(path) => load_mapping_file(path),
        None => {
            debug!("Using default field mapping");
            Ok(FieldMapping::default())
        }
    }
}

/// Load a mapping file and overlay it on the default table
///
/// # Errors
///
/// Returns [`Error::NotFound`] when the file does not exist, and
/// [`Error::Parse`] when it is not a valid mapping object.
pub fn load_mapping_file(path: &Path) -> Result<FieldMapping> {
    if !path.is_file() {
        return Err(Error::NotFound {
            path: path.display().to_string(),
        });
    }

    info!(path = %path.display(), "Loading custom mapping");
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::parse(path.display().to_string(), e.to_string()))?;

    let document: Value = match MappingFormat::from_path(path) {
        MappingFormat::Json => serde_json::from_str(&content)
            .map_err(|e| Error::parse(path.display().to_string(), e.to_string()))?,
        MappingFormat::Yaml => serde_yaml::from_str(&content)
            .map_err(|e| Error::parse(path.display().to_string(), e.to_string()))?,
    };

    parse_mapping(&document).map_err(|e| match e {
        Error::Invalid(message) => Error::parse(path.display().to_string(), message),
        other => other,
    })
}

/// Overlay an already-parsed mapping document on the default table
///
/// Unknown field names are logged and skipped.
///
/// # Errors
///
/// Returns [`Error::Invalid`] when the document is not an object or a value
/// is neither a string nor a list of strings.
pub fn parse_mapping(document: &Value) -> Result<FieldMapping> {
    let Value::Object(entries) = document else {
        return Err(Error::invalid("Mapping must be an object"));
    };

    let mut mapping = FieldMapping::default();
    for (name, columns) in entries {
        let Ok(field) = name.parse::<ContactField>() else {
            warn!(field = %name, "Unknown field in mapping");
            continue;
        };

        let aliases = match columns {
            Value::String(column) => vec![column.clone()],
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| alias_shape_error(name))?,
            _ => return Err(alias_shape_error(name)),
        };

        debug!(%field, count = aliases.len(), "Overriding aliases");
        mapping.set_aliases(field, aliases);
    }

    Ok(mapping)
}

fn alias_shape_error(field: &str) -> Error {
    Error::invalid(format!(
        "Mapping for '{field}' must be a string or list of strings"
    ))
}
