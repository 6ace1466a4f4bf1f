//! Contact construction and derived values

use std::collections::BTreeMap;

use chrono::Utc;
use tracing::trace;
use uuid::Uuid;

use crate::filename::sanitize_component;
use crate::schema::{Contact, ContactField};

/// Canonical field values resolved from one source row
///
/// A missing key means the field was not found in the source; that is
/// distinct from a key holding an empty value.
pub type FieldMap = BTreeMap<ContactField, String>;

/// Format of the REV timestamp (`YYYYMMDDTHHMMSSZ`)
const REV_FORMAT: &str = "%Y%m%dT%H%M%SZ";

impl Contact {
    /// Build a contact from resolved fields, defaulting missing ones to ""
    #[must_use]
    pub fn from_fields(fields: &FieldMap) -> Self {
        let mut contact = Self::default();
        for (field, value) in fields {
            *contact.slot_mut(*field) = value.trim().to_string();
        }
        contact
    }

    /// Build a contact from `(name, value)` pairs keyed by canonical names
    ///
    /// Unknown names are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut fields = FieldMap::new();
        for (name, value) in pairs {
            match name.as_ref().parse::<ContactField>() {
                Ok(field) => {
                    fields.insert(field, value.as_ref().to_string());
                }
                Err(_) => trace!(name = name.as_ref(), "Ignoring unknown contact field"),
            }
        }
        Self::from_fields(&fields)
    }

    /// Every field as a map, including empty ones
    #[must_use]
    pub fn to_fields(&self) -> FieldMap {
        ContactField::ALL
            .iter()
            .map(|field| (*field, self.get(*field).to_string()))
            .collect()
    }

    /// Display name: prefix, first, middle, last, suffix
    ///
    /// Returns "Unknown" when every name part is empty.
    #[must_use]
    pub fn formatted_name(&self) -> String {
        let parts = [
            &self.name_prefix,
            &self.first_name,
            &self.middle_name,
            &self.last_name,
            &self.name_suffix,
        ];
        let joined = parts
            .iter()
            .filter(|part| !part.is_empty())
            .map(|part| part.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        if joined.is_empty() {
            "Unknown".to_string()
        } else {
            joined
        }
    }

    /// Filesystem-safe `<last>_<first>.vcf` name
    ///
    /// The result never contains path separators or `..`.
    #[must_use]
    pub fn safe_filename(&self) -> String {
        let last = sanitize_component(&self.last_name);
        let first = sanitize_component(&self.first_name);
        let last = if last.is_empty() { "unknown" } else { last.as_str() };
        let first = if first.is_empty() { "contact" } else { first.as_str() };
        format!("{last}_{first}.vcf")
    }

    /// Whether any component of the default (work) address is set
    #[must_use]
    pub fn has_work_address(&self) -> bool {
        [
            &self.street,
            &self.city,
            &self.region,
            &self.p_code,
            &self.country,
        ]
        .iter()
        .any(|part| !part.is_empty())
    }

    /// Whether any component of the home address is set
    #[must_use]
    pub fn has_home_address(&self) -> bool {
        [
            &self.home_street,
            &self.home_city,
            &self.home_region,
            &self.home_p_code,
            &self.home_country,
        ]
        .iter()
        .any(|part| !part.is_empty())
    }

    /// Fresh random identifier; differs on every call
    #[must_use]
    pub fn generate_uid() -> String {
        Uuid::new_v4().to_string()
    }

    /// Current UTC time as `YYYYMMDDTHHMMSSZ`
    #[must_use]
    pub fn generate_rev() -> String {
        Utc::now().format(REV_FORMAT).to_string()
    }
}

impl From<&FieldMap> for Contact {
    fn from(fields: &FieldMap) -> Self {
        Self::from_fields(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gump() -> Contact {
        Contact::from_pairs([
            ("last_name", "Gump"),
            ("first_name", "Forrest"),
            ("title", "Shrimp Man"),
            ("org", "Bubba Gump Shrimp Co."),
        ])
    }

    #[test]
    fn from_fields_defaults_missing_to_empty() {
        let mut fields = FieldMap::new();
        fields.insert(ContactField::LastName, "Doe".to_string());
        fields.insert(ContactField::FirstName, "John".to_string());

        let contact = Contact::from_fields(&fields);
        assert_eq!(contact.last_name, "Doe");
        assert_eq!(contact.first_name, "John");
        assert_eq!(contact.title, "");
        assert_eq!(contact.email, "");
    }

    #[test]
    fn construction_trims_every_field() {
        let contact = Contact::from_pairs([
            ("last_name", "  Doe  "),
            ("first_name", "\tJohn\n"),
            ("note", "  hello "),
        ]);
        assert_eq!(contact.last_name, "Doe");
        assert_eq!(contact.first_name, "John");
        assert_eq!(contact.note, "hello");
    }

    #[test]
    fn from_pairs_ignores_unknown_names() {
        let contact = Contact::from_pairs([("last_name", "Doe"), ("shoe_size", "44")]);
        assert_eq!(contact.last_name, "Doe");
        assert_eq!(contact.to_fields().len(), ContactField::ALL.len());
    }

    #[test]
    fn to_fields_contains_every_field() {
        let fields = gump().to_fields();
        assert_eq!(fields.len(), 38);
        assert_eq!(fields[&ContactField::LastName], "Gump");
        assert_eq!(fields[&ContactField::Country], "");
    }

    #[test]
    fn formatted_name_orders_parts() {
        let contact = Contact::from_pairs([
            ("name_prefix", "Dr."),
            ("first_name", "John"),
            ("middle_name", "Q."),
            ("last_name", "Public"),
            ("name_suffix", "Jr."),
        ]);
        assert_eq!(contact.formatted_name(), "Dr. John Q. Public Jr.");
        assert_eq!(gump().formatted_name(), "Forrest Gump");
    }

    #[test]
    fn formatted_name_falls_back_to_unknown() {
        assert_eq!(Contact::default().formatted_name(), "Unknown");
    }

    #[test]
    fn safe_filename_simple() {
        let contact = Contact::from_pairs([("last_name", "Doe"), ("first_name", "John")]);
        assert_eq!(contact.safe_filename(), "doe_john.vcf");
    }

    #[test]
    fn safe_filename_replaces_special_characters() {
        let contact = Contact::from_pairs([("last_name", "O'Brien"), ("first_name", "Mary Jane")]);
        assert_eq!(contact.safe_filename(), "o_brien_mary_jane.vcf");
    }

    #[test]
    fn safe_filename_blocks_path_traversal() {
        let contact = Contact::from_pairs([
            ("last_name", "../../../etc/passwd"),
            ("first_name", "x"),
        ]);
        let filename = contact.safe_filename();
        assert!(!filename.contains(".."));
        assert!(!filename.contains('/'));
        assert!(!filename.contains('\\'));
        assert!(filename.ends_with(".vcf"));
        assert_eq!(filename, "etc_passwd_x.vcf");
    }

    #[test]
    fn safe_filename_empty_names() {
        assert_eq!(Contact::default().safe_filename(), "unknown_contact.vcf");
    }

    #[test]
    fn address_presence() {
        let contact = Contact::from_pairs([("home_city", "Greenbow")]);
        assert!(contact.has_home_address());
        assert!(!contact.has_work_address());
    }

    #[test]
    fn uid_is_fresh_per_call() {
        let first = Contact::generate_uid();
        let second = Contact::generate_uid();
        assert_ne!(first, second);
        assert_eq!(first.len(), 36);
    }

    #[test]
    fn rev_has_basic_iso_format() {
        let rev = Contact::generate_rev();
        assert_eq!(rev.len(), 16);
        assert_eq!(&rev[8..9], "T");
        assert!(rev.ends_with('Z'));
        assert!(rev[..8].chars().all(|c| c.is_ascii_digit()));
    }
}
