//! Per-version vCard syntax
//!
//! Everything that differs between 3.0 (RFC 2426) and 4.0 (RFC 6350) lives
//! in a [`Syntax`] table; the serializer itself is version-agnostic.

use vcf_model::VCardVersion;

use crate::escape::escape;
use crate::media::{ImageKind, is_uri};

/// Gender codes that vCard 4.0 emits bare
const GENDER_CODES: &[&str] = &["M", "F", "O", "N", "U"];

/// Property prefixes and value rules for one vCard version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syntax {
    pub version: VCardVersion,
    /// Parameter appended to text properties (`;CHARSET=UTF-8` or nothing)
    pub charset: &'static str,
    pub anniversary: &'static str,
    pub tel_work: &'static str,
    pub tel_cell: &'static str,
    pub tel_home: &'static str,
    pub tel_fax: &'static str,
    pub email_work: &'static str,
    pub email_home: &'static str,
    pub url_work: &'static str,
    pub adr_work: &'static str,
    pub adr_home: &'static str,
    pub geo_prefix: &'static str,
    /// Separator between latitude and longitude
    pub geo_separator: char,
    pub uid_prefix: &'static str,
}

/// vCard 3.0 (RFC 2426)
pub const V3: Syntax = Syntax {
    version: VCardVersion::V3,
    charset: ";CHARSET=UTF-8",
    anniversary: "X-ANNIVERSARY:",
    tel_work: "TEL;TYPE=WORK,VOICE:",
    tel_cell: "TEL;TYPE=CELL:",
    tel_home: "TEL;TYPE=HOME,VOICE:",
    tel_fax: "TEL;TYPE=FAX:",
    email_work: "EMAIL;TYPE=WORK:",
    email_home: "EMAIL;TYPE=HOME:",
    url_work: "URL;TYPE=WORK:",
    adr_work: "ADR;TYPE=WORK;CHARSET=UTF-8:",
    adr_home: "ADR;TYPE=HOME;CHARSET=UTF-8:",
    geo_prefix: "GEO:",
    geo_separator: ';',
    uid_prefix: "UID:",
};

/// vCard 4.0 (RFC 6350)
pub const V4: Syntax = Syntax {
    version: VCardVersion::V4,
    charset: "",
    anniversary: "ANNIVERSARY:",
    tel_work: "TEL;TYPE=work,voice;VALUE=uri:tel:",
    tel_cell: "TEL;TYPE=cell;VALUE=uri:tel:",
    tel_home: "TEL;TYPE=home,voice;VALUE=uri:tel:",
    tel_fax: "TEL;TYPE=fax;VALUE=uri:tel:",
    email_work: "EMAIL;TYPE=work:",
    email_home: "EMAIL;TYPE=home:",
    url_work: "URL;TYPE=work:",
    adr_work: "ADR;TYPE=work:",
    adr_home: "ADR;TYPE=home:",
    geo_prefix: "GEO:geo:",
    geo_separator: ',',
    uid_prefix: "UID:urn:uuid:",
};

impl Syntax {
    /// The table for `version`
    #[must_use]
    pub const fn for_version(version: VCardVersion) -> &'static Syntax {
        match version {
            VCardVersion::V3 => &V3,
            VCardVersion::V4 => &V4,
        }
    }

    /// A text property with the version's charset parameter, value escaped
    #[must_use]
    pub fn text(&self, name: &str, value: &str) -> String {
        format!("{name}{}:{}", self.charset, escape(value))
    }

    /// The gender line
    #[must_use]
    pub fn gender(&self, value: &str) -> String {
        match self.version {
            VCardVersion::V3 => format!("X-GENDER:{}", escape(value)),
            VCardVersion::V4 => {
                let upper = value.to_uppercase();
                if GENDER_CODES.contains(&upper.as_str()) {
                    format!("GENDER:{upper}")
                } else {
                    format!("GENDER:;{}", escape(value))
                }
            }
        }
    }

    /// A GEO line with the separator normalized for this version
    #[must_use]
    pub fn geo(&self, value: &str) -> String {
        let normalized: String = value
            .chars()
            .map(|c| if c == ',' || c == ';' { self.geo_separator } else { c })
            .collect();
        format!("{}{normalized}", self.geo_prefix)
    }

    /// A PHOTO or LOGO line, by reference or inline base64
    #[must_use]
    pub fn media(&self, name: &str, value: &str) -> String {
        let uri = is_uri(value);
        match self.version {
            VCardVersion::V3 if uri => format!("{name};VALUE=URI:{value}"),
            VCardVersion::V3 => format!(
                "{name};ENCODING=b;TYPE={}:{value}",
                ImageKind::sniff(value).type_param()
            ),
            VCardVersion::V4 if uri => format!("{name}:{value}"),
            VCardVersion::V4 => format!(
                "{name};ENCODING=b;MEDIATYPE={}:{value}",
                ImageKind::sniff(value).media_type()
            ),
        }
    }

    /// A KEY line, by reference or inline base64
    #[must_use]
    pub fn key(&self, value: &str) -> String {
        let uri = is_uri(value);
        match self.version {
            VCardVersion::V3 if uri => format!("KEY;VALUE=URI:{value}"),
            VCardVersion::V3 => format!("KEY;ENCODING=b:{value}"),
            VCardVersion::V4 if uri => format!("KEY:{value}"),
            VCardVersion::V4 => format!("KEY;MEDIATYPE=application/pgp-keys:{value}"),
        }
    }
}
