//! Settings file for the `convert` and `test` defaults

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Defaults read from `--config`; explicit flags override every field
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub delimiter: Option<String>,
    pub output: Option<PathBuf>,
    /// Kept as text so YAML `4.0` and `"4.0"` both work
    #[serde(deserialize_with = "version_text")]
    pub vcard_version: Option<String>,
    pub single_vcard: Option<bool>,
    pub split_max_bytes: Option<usize>,
    pub split_max_count: Option<usize>,
    pub split_base: Option<String>,
    pub mapping: Option<PathBuf>,
    pub encoding: Option<String>,
    pub strict: Option<bool>,
}

impl Settings {
    /// Load settings from a YAML (`.yaml`/`.yml`) or JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        let settings = if is_yaml {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Invalid YAML config {}", path.display()))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON config {}", path.display()))?
        };
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(settings)
    }

    /// Load `path` if given, otherwise return empty settings
    pub fn load_optional(path: Option<&Path>) -> anyhow::Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}

fn version_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        String(String),
        Number(f64),
    }

    Ok(Option::<Text>::deserialize(deserializer)?.map(|text| match text {
        Text::String(value) => value,
        Text::Number(value) => format!("{value:.1}"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn yaml_settings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("csv2vcard.yaml");
        std::fs::write(
            &path,
            "delimiter: \";\"\nvcard_version: 4.0\nsplit_max_count: 50\nstrict: true\n",
        )
        .unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.delimiter.as_deref(), Some(";"));
        assert_eq!(settings.vcard_version.as_deref(), Some("4.0"));
        assert_eq!(settings.split_max_count, Some(50));
        assert_eq!(settings.strict, Some(true));
        assert_eq!(settings.output, None);
    }

    #[test]
    fn json_settings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("csv2vcard.json");
        std::fs::write(&path, r#"{"output": "vcards", "vcard_version": "3.0"}"#).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.output, Some(PathBuf::from("vcards")));
        assert_eq!(settings.vcard_version.as_deref(), Some("3.0"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"delimeter": ";"}"#).unwrap();
        assert!(Settings::load(&path).is_err());
    }

    #[test]
    fn no_path_means_defaults() {
        assert_eq!(Settings::load_optional(None).unwrap(), Settings::default());
    }
}
