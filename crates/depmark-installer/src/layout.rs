use std::path::{Path, PathBuf};

/// Filesystem layout for the install-marker store: one directory per
/// installed module under a single configurable root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulesLayout {
    root: PathBuf,
}

impl ModulesLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn module_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}
