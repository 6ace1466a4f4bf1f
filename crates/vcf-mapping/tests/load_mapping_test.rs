//! Integration tests for loading mapping override files from disk.

use std::fs;

use tempfile::TempDir;
use vcf_mapping::{Error, FieldMapping, load_mapping, load_mapping_file};
use vcf_model::ContactField;

#[test]
fn test_load_custom_json_mapping() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("mapping.json");
    fs::write(
        &path,
        r#"{"last_name": ["Nachname", "Familienname"], "first_name": "Vorname"}"#,
    )?;

    let mapping = load_mapping(Some(&path))?;
    assert_eq!(
        mapping.aliases(ContactField::LastName),
        ["Nachname".to_string(), "Familienname".to_string()]
    );
    assert_eq!(mapping.aliases(ContactField::FirstName), ["Vorname".to_string()]);
    // Untouched fields keep their defaults
    assert_eq!(mapping.aliases(ContactField::Email)[0], "email");

    let fields = mapping.resolve([("NACHNAME", "Müller"), ("vorname", "Jörg")]);
    assert_eq!(fields[&ContactField::LastName], "Müller");
    assert_eq!(fields[&ContactField::FirstName], "Jörg");
    Ok(())
}

#[test]
fn test_load_yaml_mapping() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("mapping.yaml");
    fs::write(&path, "email:\n  - Work Mail\n  - Mail\nnote: Remarks\n")?;

    let mapping = load_mapping_file(&path)?;
    assert_eq!(
        mapping.aliases(ContactField::Email),
        ["Work Mail".to_string(), "Mail".to_string()]
    );
    assert_eq!(mapping.aliases(ContactField::Note), ["Remarks".to_string()]);
    Ok(())
}

#[test]
fn test_missing_mapping_file() {
    let dir = TempDir::new().unwrap();
    let err = load_mapping_file(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
    assert!(err.to_string().contains("not found"));
}

#[test]
fn test_invalid_json_mapping() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    let err = load_mapping_file(&path).unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
}

#[test]
fn test_top_level_array_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("list.json");
    fs::write(&path, r#"["last_name", "first_name"]"#).unwrap();

    let err = load_mapping_file(&path).unwrap_err();
    assert!(err.to_string().contains("must be an object"));
}

#[test]
fn test_bad_alias_shape_names_file_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shape.json");
    fs::write(&path, r#"{"email": 42}"#).unwrap();

    let err = load_mapping_file(&path).unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
    let message = err.to_string();
    assert!(message.contains("shape.json"));
    assert!(message.contains("'email'"));
    assert!(!message.contains("Invalid mapping:"));
    assert_eq!(message.matches("Invalid mapping").count(), 1);
}

#[test]
fn test_surname_header_with_default_mapping() {
    let mapping = FieldMapping::default();
    let fields = mapping.resolve([("Surname", "Gump"), ("First Name", "ignored")]);
    assert_eq!(fields[&ContactField::LastName], "Gump");
    // "first name" (with a space) is not a default alias
    assert!(!fields.contains_key(&ContactField::FirstName));
}
