//! Default alias table
//!
//! Aliases are compared after lowercasing and trimming both sides.
//! Typed phone, email and home-address aliases never overlap the legacy
//! single-field aliases, so one column never fills two fields.

use vcf_model::ContactField;

/// Canonical field -> accepted CSV column names, in priority order
pub const DEFAULT_ALIASES: &[(ContactField, &[&str])] = &[
    // Name components
    (
        ContactField::LastName,
        &["last_name", "lastname", "last", "surname", "family_name", "familyname"],
    ),
    (
        ContactField::FirstName,
        &["first_name", "firstname", "first", "given_name", "givenname"],
    ),
    (
        ContactField::MiddleName,
        &["middle_name", "middlename", "middle", "second_name"],
    ),
    (
        ContactField::NamePrefix,
        &["name_prefix", "prefix", "title_prefix", "honorific_prefix", "salutation"],
    ),
    (
        ContactField::NameSuffix,
        &["name_suffix", "suffix", "honorific_suffix", "generational"],
    ),
    // Basic info
    (ContactField::Nickname, &["nickname", "nick", "alias", "aka"]),
    (ContactField::Gender, &["gender", "sex"]),
    (
        ContactField::Birthday,
        &["birthday", "birthdate", "birth_date", "dob", "date_of_birth", "bday"],
    ),
    (
        ContactField::Anniversary,
        &["anniversary", "wedding_anniversary", "wedding_date"],
    ),
    // Phones
    (
        ContactField::Phone,
        &["phone", "telephone", "tel", "mobile", "cell", "cellphone", "phone_number"],
    ),
    (
        ContactField::PhoneCell,
        &["phone_cell", "cell_phone", "mobile_phone", "phone_mobile"],
    ),
    (ContactField::PhoneHome, &["phone_home", "home_phone", "home_tel"]),
    (
        ContactField::PhoneWork,
        &["phone_work", "work_phone", "business_phone", "office_phone"],
    ),
    (ContactField::PhoneFax, &["phone_fax", "fax", "fax_number"]),
    // Email and web
    (
        ContactField::Email,
        &["email", "e-mail", "email_address", "mail"],
    ),
    (
        ContactField::EmailHome,
        &["email_home", "home_email", "personal_email"],
    ),
    (
        ContactField::EmailWork,
        &["email_work", "work_email", "business_email"],
    ),
    (
        ContactField::Website,
        &["website", "url", "web", "homepage", "webpage", "site"],
    ),
    // Organization
    (
        ContactField::Org,
        &["org", "organization", "organisation", "company", "employer", "business"],
    ),
    (ContactField::Title, &["title", "job_title", "jobtitle", "position"]),
    (ContactField::Role, &["role", "job_role", "function", "occupation"]),
    // Work / default address
    (
        ContactField::Street,
        &["street", "street_address", "address", "address1", "street1"],
    ),
    (ContactField::City, &["city", "locality", "town"]),
    (
        ContactField::Region,
        &["region", "state", "province", "county", "state_province"],
    ),
    (
        ContactField::PCode,
        &["p_code", "postal_code", "postalcode", "zip", "zipcode", "zip_code", "postcode"],
    ),
    (ContactField::Country, &["country", "country_name", "nation"]),
    // Home address
    (
        ContactField::HomeStreet,
        &["home_street", "home_address", "home_street_address"],
    ),
    (ContactField::HomeCity, &["home_city", "home_town"]),
    (
        ContactField::HomeRegion,
        &["home_region", "home_state", "home_province"],
    ),
    (
        ContactField::HomePCode,
        &["home_p_code", "home_postal_code", "home_zip", "home_postcode"],
    ),
    (ContactField::HomeCountry, &["home_country"]),
    // Media
    (ContactField::Photo, &["photo", "picture", "avatar", "image"]),
    (ContactField::Logo, &["logo", "company_logo"]),
    // Other
    (ContactField::Categories, &["categories", "category", "tags", "groups"]),
    (ContactField::Geo, &["geo", "coordinates", "latlon", "lat_lon"]),
    (ContactField::Tz, &["tz", "timezone", "time_zone"]),
    (ContactField::Key, &["key", "pgp_key", "public_key"]),
    (
        ContactField::Note,
        &["note", "notes", "comment", "comments", "remarks", "description"],
    ),
];
