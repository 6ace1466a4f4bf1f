//! Field-level validation rules

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$"));

const GENDER_CODES: &[&str] = &["M", "F", "O", "N", "U"];
const GENDER_WORDS: &[&str] = &["MALE", "FEMALE", "OTHER", "NONE", "UNKNOWN"];

/// Whether `email` has a `local@domain.tld` shape
#[must_use]
pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_ok_and(|pattern| pattern.is_match(email))
}

/// Whether `gender` is a vCard sex code or one of its spelled-out words
#[must_use]
pub fn validate_gender(gender: &str) -> bool {
    let upper = gender.trim().to_uppercase();
    GENDER_CODES.contains(&upper.as_str()) || GENDER_WORDS.contains(&upper.as_str())
}

/// Whether `geo` is `lat,lon` or `lat;lon` with both values in range
#[must_use]
pub fn validate_geo(geo: &str) -> bool {
    let parts: Vec<&str> = geo.split([',', ';']).map(str::trim).collect();
    let [lat, lon] = parts.as_slice() else {
        return false;
    };

    match (lat.parse::<f64>(), lon.parse::<f64>()) {
        (Ok(lat), Ok(lon)) => (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("user@example.com"));
        assert!(validate_email("user+tag@example.com"));
        assert!(validate_email("first.last@mail.example.co.uk"));
        assert!(validate_email("under_score%x@example.io"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!validate_email("userexample.com"));
        assert!(!validate_email("user@"));
        assert!(!validate_email("user@example"));
        assert!(!validate_email("user@example.c"));
        assert!(!validate_email("not an@example.com"));
        assert!(!validate_email(""));
    }

    #[test]
    fn test_gender_codes_and_words() {
        for value in ["M", "F", "O", "N", "U", "m", "Male", "FEMALE", "other", "None", "unknown"] {
            assert!(validate_gender(value), "{value}");
        }
    }

    #[test]
    fn test_invalid_gender() {
        assert!(!validate_gender("X"));
        assert!(!validate_gender("invalid"));
        assert!(!validate_gender(""));
    }

    #[test]
    fn test_valid_geo() {
        assert!(validate_geo("37.386013,-122.082932"));
        assert!(validate_geo("37.386013;-122.082932"));
        assert!(validate_geo("37.386013, -122.082932"));
        assert!(validate_geo("90.0,180.0"));
        assert!(validate_geo("-90.0,-180.0"));
        assert!(validate_geo("0,0"));
    }

    #[test]
    fn test_geo_out_of_range() {
        assert!(!validate_geo("91.0,0.0"));
        assert!(!validate_geo("-91.0,0.0"));
        assert!(!validate_geo("0.0,181.0"));
        assert!(!validate_geo("0.0,-181.0"));
        assert!(!validate_geo("NaN,0"));
    }

    #[test]
    fn test_malformed_geo() {
        assert!(!validate_geo("abc,def"));
        assert!(!validate_geo("37.386013"));
        assert!(!validate_geo("37.386013,-122.082932,100"));
        assert!(!validate_geo(""));
    }
}
