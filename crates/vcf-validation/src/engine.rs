//! Contact validation
//!
//! Every rule is checked independently. Only required-field failures are
//! escalated to errors in strict mode; malformed optional fields always
//! stay warnings.

use vcf_model::{ContactField, FieldMap};

use crate::rules::{validate_email, validate_gender, validate_geo};
use crate::{Error, Result};

/// How validation and parse problems are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Log problems and skip the offending unit
    #[default]
    Permissive,

    /// Abort on the first problem
    Strict,
}

impl Strictness {
    /// Build from a plain `strict` flag
    #[must_use]
    pub fn from_flag(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Permissive
        }
    }

    #[must_use]
    pub fn is_strict(self) -> bool {
        self == Self::Strict
    }
}

const EMAIL_FIELDS: &[ContactField] = &[
    ContactField::Email,
    ContactField::EmailHome,
    ContactField::EmailWork,
];

/// Check one contact's resolved fields
///
/// Returns the list of warnings (empty if the contact is clean).
///
/// # Errors
///
/// In strict mode, returns [`Error::Validation`] for the first missing or
/// blank required field.
pub fn check_contact(fields: &FieldMap, strictness: Strictness) -> Result<Vec<String>> {
    let mut warnings = Vec::new();
    let mut report = |message: String| -> Result<()> {
        if strictness.is_strict() {
            return Err(Error::validation(message));
        }
        warnings.push(message);
        Ok(())
    };

    let mut missing: Vec<&str> = ContactField::REQUIRED
        .iter()
        .filter(|field| !fields.contains_key(field))
        .map(|field| field.as_str())
        .collect();
    missing.sort_unstable();
    if !missing.is_empty() {
        report(format!("Missing required fields: {}", missing.join(", ")))?;
    }

    for field in ContactField::REQUIRED {
        if fields.get(field).is_some_and(|value| value.trim().is_empty()) {
            report(format!("Required field '{field}' is empty"))?;
        }
    }

    for field in EMAIL_FIELDS {
        if let Some(email) = non_empty(fields, *field) {
            if !validate_email(email) {
                warnings.push(format!("Invalid email format in {field}: {email}"));
            }
        }
    }

    if let Some(gender) = non_empty(fields, ContactField::Gender) {
        if !validate_gender(gender) {
            warnings.push(format!("Invalid gender value: {gender}"));
        }
    }

    if let Some(geo) = non_empty(fields, ContactField::Geo) {
        if !validate_geo(geo) {
            warnings.push(format!("Invalid geo coordinates: {geo}"));
        }
    }

    Ok(warnings)
}

fn non_empty(fields: &FieldMap, field: ContactField) -> Option<&str> {
    fields
        .get(&field)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(ContactField, &str)]) -> FieldMap {
        pairs
            .iter()
            .map(|(field, value)| (*field, (*value).to_string()))
            .collect()
    }

    fn complete() -> FieldMap {
        fields(&[
            (ContactField::LastName, "Gump"),
            (ContactField::FirstName, "Forrest"),
            (ContactField::Email, "forrestgump@example.com"),
        ])
    }

    #[test]
    fn test_valid_contact_has_no_warnings() {
        let warnings = check_contact(&complete(), Strictness::Permissive).unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_missing_required_fields() {
        let warnings =
            check_contact(&fields(&[(ContactField::Title, "Boss")]), Strictness::Permissive)
                .unwrap();
        assert_eq!(
            warnings,
            vec!["Missing required fields: first_name, last_name".to_string()]
        );
        assert!(warnings[0].to_lowercase().contains("required"));
    }

    #[test]
    fn test_missing_required_fields_strict() {
        let err = check_contact(&fields(&[(ContactField::Title, "Boss")]), Strictness::Strict)
            .unwrap_err();
        assert!(err.to_string().contains("required"));
    }

    #[test]
    fn test_empty_required_field() {
        let input = fields(&[(ContactField::LastName, "   "), (ContactField::FirstName, "John")]);
        let warnings = check_contact(&input, Strictness::Permissive).unwrap();
        assert_eq!(warnings, vec!["Required field 'last_name' is empty".to_string()]);

        let err = check_contact(&input, Strictness::Strict).unwrap_err();
        assert!(err.message().contains("empty"));
    }

    #[test]
    fn test_invalid_email_only_warns_even_when_strict() {
        let mut input = complete();
        input.insert(ContactField::EmailHome, "not-an-email".to_string());

        let warnings = check_contact(&input, Strictness::Strict).unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("email_home"));
    }

    #[test]
    fn test_invalid_gender() {
        let mut input = complete();
        input.insert(ContactField::Gender, "X".to_string());
        let warnings = check_contact(&input, Strictness::Permissive).unwrap();
        assert_eq!(warnings, vec!["Invalid gender value: X".to_string()]);
    }

    #[test]
    fn test_geo_range() {
        let mut input = complete();
        input.insert(ContactField::Geo, "91.0,0.0".to_string());
        let warnings = check_contact(&input, Strictness::Permissive).unwrap();
        assert!(warnings.iter().any(|w| w.contains("geo")));

        input.insert(ContactField::Geo, "37.386013,-122.082932".to_string());
        let warnings = check_contact(&input, Strictness::Permissive).unwrap();
        assert!(!warnings.iter().any(|w| w.contains("geo")));
    }

    #[test]
    fn test_rules_do_not_short_circuit() {
        let input = fields(&[
            (ContactField::LastName, ""),
            (ContactField::Email, "broken"),
            (ContactField::Gender, "?"),
            (ContactField::Geo, "north"),
        ]);
        let warnings = check_contact(&input, Strictness::Permissive).unwrap();
        assert_eq!(warnings.len(), 5);
    }

    #[test]
    fn test_strictness_flag() {
        assert!(Strictness::from_flag(true).is_strict());
        assert!(!Strictness::from_flag(false).is_strict());
        assert_eq!(Strictness::default(), Strictness::Permissive);
    }
}
