use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use depmark_core::{InstallRequests, PackageCatalog};
use depmark_installer::{DirMarkerStore, MarkerStore, ModulesLayout};
use depmark_resolver::install_closure;

use crate::config::InstallerConfig;
use crate::render::format_install_event;

/// One whole install run. Load failures are reported through `emit` and end
/// the run with zero installs; they never escalate past this function, so
/// the process still exits cleanly.
pub fn run_install_flow(config: &InstallerConfig, emit: &mut impl FnMut(&'static str, String)) {
    let catalog = match load_catalog(&config.catalog_path) {
        Ok(catalog) => catalog,
        Err(line) => {
            emit("err", line);
            return;
        }
    };
    let requests = match load_requests(&config.requests_path) {
        Ok(requests) => requests,
        Err(line) => {
            emit("err", line);
            return;
        }
    };

    let store = DirMarkerStore::new(ModulesLayout::new(&config.modules_root));
    install_closure(&catalog, &store, &requests.dependencies, &mut |event| {
        let (status, message) = format_install_event(&event);
        emit(status, message);
    });
    emit("ok", "All done.".to_string());
}

pub fn run_list_flow(config: &InstallerConfig) -> Vec<String> {
    let store = DirMarkerStore::new(ModulesLayout::new(&config.modules_root));
    let installed = store.installed();
    if installed.is_empty() {
        return vec!["No installed modules".to_string()];
    }
    installed.into_iter().collect()
}

pub fn run_doctor_flow(config: &InstallerConfig) -> Vec<String> {
    vec![
        format!("catalog: {}", config.catalog_path.display()),
        format!("requests: {}", config.requests_path.display()),
        format!("modules root: {}", config.modules_root.display()),
    ]
}

fn load_catalog(path: &Path) -> Result<PackageCatalog, String> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => return Err(format!("Error reading {}. {err}", path.display())),
    };
    PackageCatalog::from_json_str(&raw)
        .map_err(|err| format!("Error parsing {}. {err:#}", path.display()))
}

fn load_requests(path: &Path) -> Result<InstallRequests, String> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(format!("Missing file: {}", path.display()))
        }
        Err(err) => return Err(format!("Error reading {}. {err}", path.display())),
    };
    InstallRequests::from_json_str(&raw)
        .map_err(|err| format!("Error parsing {}. {err:#}", path.display()))
}
