use depmark_core::{CatalogEntry, PackageCatalog};
use depmark_installer::MarkerStore;

use crate::types::{DependencyStatus, InstallEvent};

/// Installs `name` and, transitively, everything reachable from it through
/// direct-dependency edges.
///
/// Behavior to be aware of, all deliberate:
/// - A name with no catalog entry is treated as already satisfied: no
///   marker, no event, no recursion.
/// - The installed set is re-derived from the store on every call, so
///   markers created earlier in the walk stop later arrivals at the same
///   package. That guard skips the whole branch: an already-installed
///   package is never recursed into from its own call.
/// - The walk still descends into dependencies that were just annotated as
///   already installed; the child call's own guard is what stops them.
/// - The marker is created before the entry shape is checked, so a
///   malformed entry still leaves a marker behind.
pub fn install_package<S, F>(catalog: &PackageCatalog, store: &S, name: &str, report: &mut F)
where
    S: MarkerStore,
    F: FnMut(InstallEvent),
{
    let Some(entry) = catalog.get(name) else {
        return;
    };

    let installed = store.installed();
    if installed.contains(name) {
        return;
    }

    if let Err(err) = store.create_marker(name) {
        report(InstallEvent::MarkerFailed {
            name: name.to_string(),
            error: err.to_string(),
        });
        return;
    }
    report(InstallEvent::Installing {
        name: name.to_string(),
    });

    let CatalogEntry::Dependencies(dependencies) = entry else {
        report(InstallEvent::MalformedEntry {
            name: name.to_string(),
        });
        return;
    };

    if !dependencies.is_empty() {
        report(InstallEvent::Requires {
            name: name.to_string(),
            dependencies: dependencies
                .iter()
                .map(|dependency| DependencyStatus {
                    name: dependency.clone(),
                    already_installed: installed.contains(dependency),
                })
                .collect(),
        });
    }

    for dependency in dependencies {
        install_package(catalog, store, dependency, report);
    }
}

/// Runs one install over a whole request set, in the set's iteration order.
/// A failed branch only aborts itself; the remaining requests still run.
pub fn install_closure<'a, S, F, I>(catalog: &PackageCatalog, store: &S, requests: I, report: &mut F)
where
    S: MarkerStore,
    F: FnMut(InstallEvent),
    I: IntoIterator<Item = &'a String>,
{
    for name in requests {
        install_package(catalog, store, name, report);
    }
}
