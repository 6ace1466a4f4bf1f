//! Canonical contact schema
//!
//! The field list is declared once. Both [`ContactField`] and [`Contact`]
//! are generated from it, so a field cannot exist in one and not the other.

use std::fmt;
use std::str::FromStr;

use crate::Error;

macro_rules! contact_schema {
    ($( $(#[$doc:meta])* $variant:ident => $field:ident, )+) => {
        /// Canonical contact field names
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum ContactField {
            $( $(#[$doc])* $variant, )+
        }

        impl ContactField {
            /// Every canonical field, in declaration order
            pub const ALL: &'static [ContactField] = &[ $( ContactField::$variant, )+ ];

            /// The snake_case name used in mapping files and field maps
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( ContactField::$variant => stringify!($field), )+
                }
            }
        }

        /// A contact record with every canonical field as a string
        ///
        /// Construct it through [`Contact::from_fields`] or
        /// [`Contact::from_pairs`] so values are trimmed.
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct Contact {
            $( $(#[$doc])* pub $field: String, )+
        }

        impl Contact {
            /// Value of a single field
            #[must_use]
            pub fn get(&self, field: ContactField) -> &str {
                match field {
                    $( ContactField::$variant => &self.$field, )+
                }
            }

            pub(crate) fn slot_mut(&mut self, field: ContactField) -> &mut String {
                match field {
                    $( ContactField::$variant => &mut self.$field, )+
                }
            }
        }
    };
}

contact_schema! {
    /// Family name
    LastName => last_name,
    /// Given name
    FirstName => first_name,
    /// Additional names
    MiddleName => middle_name,
    /// Honorific prefix (e.g. "Dr.")
    NamePrefix => name_prefix,
    /// Honorific suffix (e.g. "Jr.")
    NameSuffix => name_suffix,
    Nickname => nickname,
    /// M/F/O/N/U, the spelled-out words, or free text
    Gender => gender,
    /// `YYYY-MM-DD` or `YYYYMMDD`
    Birthday => birthday,
    /// `YYYY-MM-DD` or `YYYYMMDD`
    Anniversary => anniversary,
    /// Default phone number, emitted as a work voice line
    Phone => phone,
    PhoneCell => phone_cell,
    PhoneHome => phone_home,
    PhoneWork => phone_work,
    PhoneFax => phone_fax,
    /// Default email address, emitted as a work address
    Email => email,
    EmailHome => email_home,
    EmailWork => email_work,
    Website => website,
    /// Organization name
    Org => org,
    /// Job title
    Title => title,
    Role => role,
    Street => street,
    City => city,
    Region => region,
    /// Postal code
    PCode => p_code,
    Country => country,
    HomeStreet => home_street,
    HomeCity => home_city,
    HomeRegion => home_region,
    HomePCode => home_p_code,
    HomeCountry => home_country,
    /// URL or base64 image payload
    Photo => photo,
    /// URL or base64 image payload
    Logo => logo,
    /// Comma-joined tag list
    Categories => categories,
    /// `lat,lon` or `lat;lon`
    Geo => geo,
    /// UTC offset or zone name
    Tz => tz,
    /// URL or base64 public key
    Key => key,
    Note => note,
}

impl ContactField {
    /// Fields that validation expects to be present and non-empty
    pub const REQUIRED: &'static [ContactField] = &[ContactField::LastName, ContactField::FirstName];

    /// Whether validation treats this field as required
    #[must_use]
    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == wanted)
            .ok_or_else(|| Error::unknown_field(wanted))
    }
}
