//! Column alias resolution

use std::collections::{BTreeMap, HashMap};

use tracing::trace;
use vcf_model::{ContactField, FieldMap};

use crate::defaults::DEFAULT_ALIASES;

/// Effective alias table: canonical field -> ordered column aliases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapping {
    aliases: BTreeMap<ContactField, Vec<String>>,
}

impl Default for FieldMapping {
    fn default() -> Self {
        let aliases = DEFAULT_ALIASES
            .iter()
            .map(|(field, names)| {
                (
                    *field,
                    names.iter().map(|name| (*name).to_string()).collect(),
                )
            })
            .collect();
        Self { aliases }
    }
}

impl FieldMapping {
    /// Mapping with the built-in alias table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the aliases of one field
    pub fn set_aliases(&mut self, field: ContactField, aliases: Vec<String>) {
        self.aliases.insert(field, aliases);
    }

    /// Overlay a set of per-field replacements on this mapping
    #[must_use]
    pub fn with_overrides<I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (ContactField, Vec<String>)>,
    {
        for (field, aliases) in overrides {
            self.set_aliases(field, aliases);
        }
        self
    }

    /// Aliases configured for a field
    #[must_use]
    pub fn aliases(&self, field: ContactField) -> &[String] {
        self.aliases
            .get(&field)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterate over `(field, aliases)` entries
    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &[String])> {
        self.aliases
            .iter()
            .map(|(field, aliases)| (*field, aliases.as_slice()))
    }

    /// Translate one CSV row into canonical fields
    ///
    /// Column names match case-insensitively after trimming. For each field
    /// the first alias present in the row with a non-empty value wins.
    /// Fields without a match are left out of the result.
    pub fn resolve<'a, I>(&self, row: I) -> FieldMap
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let normalized: HashMap<String, &str> = row
            .into_iter()
            .map(|(column, value)| (normalize(column), value))
            .collect();

        let mut fields = FieldMap::new();
        for (field, aliases) in &self.aliases {
            let hit = aliases
                .iter()
                .filter_map(|alias| normalized.get(&normalize(alias)))
                .find(|value| !value.is_empty());

            if let Some(value) = hit {
                trace!(%field, "Resolved column");
                fields.insert(*field, (*value).to_string());
            }
        }
        fields
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
