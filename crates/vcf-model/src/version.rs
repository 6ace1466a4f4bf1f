//! vCard versions

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::Error;

/// Supported vCard wire formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum VCardVersion {
    /// vCard 3.0 (RFC 2426)
    #[default]
    V3,
    /// vCard 4.0 (RFC 6350)
    V4,
}

impl VCardVersion {
    /// Value of the `VERSION` property
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            VCardVersion::V3 => "3.0",
            VCardVersion::V4 => "4.0",
        }
    }
}

impl fmt::Display for VCardVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VCardVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "3.0" | "3" => Ok(VCardVersion::V3),
            "4.0" | "4" => Ok(VCardVersion::V4),
            other => Err(Error::invalid_version(other)),
        }
    }
}

impl TryFrom<String> for VCardVersion {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_strings() {
        assert_eq!(VCardVersion::V3.as_str(), "3.0");
        assert_eq!(VCardVersion::V4.to_string(), "4.0");
        assert_eq!(VCardVersion::default(), VCardVersion::V3);
    }

    #[test]
    fn parse_versions() {
        assert_eq!("3.0".parse::<VCardVersion>().unwrap(), VCardVersion::V3);
        assert_eq!("4.0".parse::<VCardVersion>().unwrap(), VCardVersion::V4);
        assert_eq!(" 4 ".parse::<VCardVersion>().unwrap(), VCardVersion::V4);
    }

    #[test]
    fn invalid_version_is_rejected() {
        let err = "2.1".parse::<VCardVersion>().unwrap_err();
        assert!(err.to_string().contains("Invalid vCard version '2.1'"));
    }

    #[test]
    fn deserializes_from_string() {
        let version: VCardVersion = serde_json::from_str("\"4.0\"").unwrap();
        assert_eq!(version, VCardVersion::V4);
        assert!(serde_json::from_str::<VCardVersion>("\"5.0\"").is_err());
    }
}
