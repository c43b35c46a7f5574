use std::collections::BTreeSet;
use std::fs;

use anyhow::{Context, Result};

use crate::layout::ModulesLayout;

/// Install-marker storage. `installed` must re-derive the set from current
/// external state on every call; markers created earlier in the same run
/// must be visible to later queries. The resolver relies on that visibility
/// to terminate on cyclic dependency graphs, so an implementation whose
/// `create_marker` succeeds without making the name show up in `installed`
/// can recurse without bound.
pub trait MarkerStore {
    fn installed(&self) -> BTreeSet<String>;
    fn create_marker(&self, name: &str) -> Result<()>;
}

/// The real store: marker presence is directory presence under the modules
/// root.
#[derive(Debug, Clone)]
pub struct DirMarkerStore {
    layout: ModulesLayout,
}

impl DirMarkerStore {
    pub fn new(layout: ModulesLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &ModulesLayout {
        &self.layout
    }
}

impl MarkerStore for DirMarkerStore {
    fn installed(&self) -> BTreeSet<String> {
        // A missing or unreadable root means nothing is installed yet.
        let Ok(entries) = fs::read_dir(self.layout.root()) else {
            return BTreeSet::new();
        };

        entries
            .flatten()
            .filter(|entry| {
                entry
                    .file_type()
                    .map(|file_type| file_type.is_dir())
                    .unwrap_or(false)
            })
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect()
    }

    fn create_marker(&self, name: &str) -> Result<()> {
        let dir = self.layout.module_dir(name);
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create install marker: {}", dir.display()))?;
        Ok(())
    }
}
