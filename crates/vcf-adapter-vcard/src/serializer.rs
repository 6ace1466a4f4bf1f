//! vCard serializer

use tracing::debug;
use vcf_model::{Contact, FieldMap, VCardOutput, VCardVersion};

use crate::escape::escape;
use crate::syntax::Syntax;

/// Serializer for vCard text
#[derive(Debug, Clone, Copy, Default)]
pub struct VCardSerializer {
    version: VCardVersion,
}

impl VCardSerializer {
    /// Create a serializer for vCard 3.0
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target version
    #[must_use]
    pub fn with_version(mut self, version: VCardVersion) -> Self {
        self.version = version;
        self
    }

    pub fn version(&self) -> VCardVersion {
        self.version
    }

    /// Serialize one contact
    #[must_use]
    pub fn serialize(&self, contact: &Contact) -> VCardOutput {
        let name = contact.formatted_name();
        let text = render(contact, Syntax::for_version(self.version), &name);
        debug!(version = %self.version, name = %name, "Created vCard");
        VCardOutput::new(contact.safe_filename(), text, name, self.version)
    }
}

/// Serialize one contact for `version`
#[must_use]
pub fn serialize(contact: &Contact, version: VCardVersion) -> VCardOutput {
    VCardSerializer::new().with_version(version).serialize(contact)
}

/// Serialize raw resolved fields, normalizing them into a contact first
#[must_use]
pub fn serialize_fields(fields: &FieldMap, version: VCardVersion) -> VCardOutput {
    serialize(&Contact::from_fields(fields), version)
}

/// Collects property lines, skipping empty values
struct Lines {
    lines: Vec<String>,
}

impl Lines {
    fn new(version: VCardVersion) -> Self {
        Self {
            lines: vec!["BEGIN:VCARD".to_string(), format!("VERSION:{version}")],
        }
    }

    fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    /// Emit `build(value)` only for a non-empty value
    fn optional(&mut self, value: &str, build: impl FnOnce(&str) -> String) {
        if !value.is_empty() {
            self.lines.push(build(value));
        }
    }

    fn finish(mut self) -> String {
        self.lines.push("END:VCARD".to_string());
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

fn render(contact: &Contact, syntax: &Syntax, formatted_name: &str) -> String {
    let mut lines = Lines::new(syntax.version);

    let n = [
        &contact.last_name,
        &contact.first_name,
        &contact.middle_name,
        &contact.name_prefix,
        &contact.name_suffix,
    ]
    .map(|part| escape(part))
    .join(";");
    lines.push(format!("N{}:{n}", syntax.charset));
    lines.push(syntax.text("FN", formatted_name));

    lines.optional(&contact.nickname, |v| syntax.text("NICKNAME", v));
    lines.optional(&contact.gender, |v| syntax.gender(v));
    lines.optional(&contact.birthday, |v| format!("BDAY:{}", strip_dashes(v)));
    lines.optional(&contact.anniversary, |v| {
        format!("{}{}", syntax.anniversary, strip_dashes(v))
    });

    lines.optional(&contact.title, |v| syntax.text("TITLE", v));
    lines.optional(&contact.role, |v| syntax.text("ROLE", v));
    lines.optional(&contact.org, |v| syntax.text("ORG", v));

    lines.optional(&contact.phone, |v| format!("{}{v}", syntax.tel_work));
    lines.optional(&contact.phone_cell, |v| format!("{}{v}", syntax.tel_cell));
    lines.optional(&contact.phone_home, |v| format!("{}{v}", syntax.tel_home));
    lines.optional(&contact.phone_work, |v| format!("{}{v}", syntax.tel_work));
    lines.optional(&contact.phone_fax, |v| format!("{}{v}", syntax.tel_fax));

    lines.optional(&contact.email, |v| format!("{}{v}", syntax.email_work));
    lines.optional(&contact.email_home, |v| format!("{}{v}", syntax.email_home));
    lines.optional(&contact.email_work, |v| format!("{}{v}", syntax.email_work));

    lines.optional(&contact.website, |v| format!("{}{v}", syntax.url_work));

    if contact.has_work_address() {
        lines.push(address(
            syntax.adr_work,
            [
                &contact.street,
                &contact.city,
                &contact.region,
                &contact.p_code,
                &contact.country,
            ],
        ));
    }
    if contact.has_home_address() {
        lines.push(address(
            syntax.adr_home,
            [
                &contact.home_street,
                &contact.home_city,
                &contact.home_region,
                &contact.home_p_code,
                &contact.home_country,
            ],
        ));
    }

    lines.optional(&contact.photo, |v| syntax.media("PHOTO", v));
    lines.optional(&contact.logo, |v| syntax.media("LOGO", v));

    lines.optional(&contact.categories, |v| syntax.text("CATEGORIES", v));
    lines.optional(&contact.geo, |v| syntax.geo(v));
    lines.optional(&contact.tz, |v| format!("TZ:{}", escape(v)));
    lines.optional(&contact.key, |v| syntax.key(v));
    lines.optional(&contact.note, |v| syntax.text("NOTE", v));

    lines.push(format!("REV:{}", Contact::generate_rev()));
    lines.push(format!("{}{}", syntax.uid_prefix, Contact::generate_uid()));

    lines.finish()
}

/// `POBox;Ext;Street;City;Region;PostalCode;Country` with the first two empty
fn address(prefix: &str, parts: [&String; 5]) -> String {
    let parts = parts.map(|part| escape(part)).join(";");
    format!("{prefix};;{parts}")
}

fn strip_dashes(date: &str) -> String {
    date.replace('-', "")
}
