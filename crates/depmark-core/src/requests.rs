use std::collections::BTreeSet;

use anyhow::Context;
use serde::Deserialize;

/// Top-level install requests. Unknown fields in the document are ignored;
/// a missing `dependencies` field reads as the empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InstallRequests {
    #[serde(default)]
    pub dependencies: BTreeSet<String>,
}

impl InstallRequests {
    pub fn from_json_str(input: &str) -> anyhow::Result<Self> {
        serde_json::from_str(input).context("failed to parse install requests")
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}
