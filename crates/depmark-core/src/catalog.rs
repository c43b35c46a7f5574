use std::collections::BTreeMap;

use anyhow::{anyhow, Context};
use serde_json::Value;

/// One catalog value. A value that is not a JSON array is kept as `Invalid`
/// rather than failing the whole catalog load; it is reported only if an
/// install actually reaches that entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEntry {
    Dependencies(Vec<String>),
    Invalid,
}

/// The full known mapping of package names to their direct dependencies.
/// Built once from the catalog document, read-only afterwards. A name may
/// appear as a dependency without being a key here (unresolved leaf); that
/// is tolerated, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageCatalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl PackageCatalog {
    pub fn from_json_str(input: &str) -> anyhow::Result<Self> {
        let root: Value =
            serde_json::from_str(input).context("failed to parse package catalog")?;
        let Value::Object(fields) = root else {
            return Err(anyhow!("package catalog root must be a JSON object"));
        };

        let mut entries = BTreeMap::new();
        for (name, value) in fields {
            entries.insert(name, parse_entry(&value));
        }
        Ok(Self { entries })
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_entry(value: &Value) -> CatalogEntry {
    let Value::Array(items) = value else {
        return CatalogEntry::Invalid;
    };

    let dependencies = items
        .iter()
        .map(|item| match item {
            Value::String(name) => name.clone(),
            other => other.to_string(),
        })
        .collect();
    CatalogEntry::Dependencies(dependencies)
}
