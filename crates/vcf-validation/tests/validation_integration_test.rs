use std::fs;

use tempfile::TempDir;
use vcf_model::{ContactField, FieldMap};
use vcf_validation::{Strictness, check_contact, check_csv_file, check_output_directory};

fn row(pairs: &[(ContactField, &str)]) -> FieldMap {
    pairs
        .iter()
        .map(|(field, value)| (*field, (*value).to_string()))
        .collect()
}

#[test]
fn complete_contact_passes_both_modes() -> anyhow::Result<()> {
    let fields = row(&[
        (ContactField::LastName, "Gump"),
        (ContactField::FirstName, "Forrest"),
        (ContactField::Email, "forrestgump@example.com"),
        (ContactField::Gender, "M"),
        (ContactField::Geo, "30.3,-89.1"),
    ]);

    assert!(check_contact(&fields, Strictness::Permissive)?.is_empty());
    assert!(check_contact(&fields, Strictness::Strict)?.is_empty());
    Ok(())
}

#[test]
fn optional_problems_are_reported_together() -> anyhow::Result<()> {
    let fields = row(&[
        (ContactField::LastName, "Gump"),
        (ContactField::FirstName, "Forrest"),
        (ContactField::Email, "forrest-at-example"),
        (ContactField::EmailWork, "work@example.com"),
        (ContactField::Gender, "robot"),
        (ContactField::Geo, "200,0"),
    ]);

    let warnings = check_contact(&fields, Strictness::Strict)?;
    assert_eq!(
        warnings,
        vec![
            "Invalid email format in email: forrest-at-example".to_string(),
            "Invalid gender value: robot".to_string(),
            "Invalid geo coordinates: 200,0".to_string(),
        ]
    );
    Ok(())
}

#[test]
fn strict_mode_rejects_blank_first_name() {
    let fields = row(&[
        (ContactField::LastName, "Gump"),
        (ContactField::FirstName, ""),
    ]);
    let err = check_contact(&fields, Strictness::Strict).unwrap_err();
    assert_eq!(err.message(), "Required field 'first_name' is empty");
}

#[test]
fn input_and_output_paths() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let csv = dir.path().join("contacts.csv");
    fs::write(&csv, "last_name,first_name\nGump,Forrest\n")?;

    check_csv_file(&csv, Strictness::Strict)?;
    check_output_directory(&dir.path().join("export"))?;
    assert!(check_output_directory(&csv).is_err());
    Ok(())
}
