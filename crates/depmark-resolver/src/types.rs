/// One direct dependency as seen at the moment its parent was installed.
/// `already_installed` reflects the installed set captured before the
/// parent's marker was created; it is informational and never prevents the
/// walk from descending into the dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyStatus {
    pub name: String,
    pub already_installed: bool,
}

/// Progress events emitted during an install run, in the order they happen.
/// Rendering lives with the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallEvent {
    Installing {
        name: String,
    },
    MarkerFailed {
        name: String,
        error: String,
    },
    Requires {
        name: String,
        dependencies: Vec<DependencyStatus>,
    },
    MalformedEntry {
        name: String,
    },
}
