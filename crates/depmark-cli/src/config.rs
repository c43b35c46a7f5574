use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "depmark.toml";
pub const DEFAULT_CATALOG_PATH: &str = "all_packages.json";
pub const DEFAULT_REQUESTS_PATH: &str = "dependencies.json";
pub const DEFAULT_MODULES_ROOT: &str = "installed_modules";

/// Resolved configuration: defaults, then the config file, then CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerConfig {
    pub catalog_path: PathBuf,
    pub requests_path: PathBuf,
    pub modules_root: PathBuf,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            requests_path: PathBuf::from(DEFAULT_REQUESTS_PATH),
            modules_root: PathBuf::from(DEFAULT_MODULES_ROOT),
        }
    }
}

#[derive(Debug, Default)]
pub struct ConfigOverrides {
    pub catalog: Option<PathBuf>,
    pub requests: Option<PathBuf>,
    pub modules_root: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    catalog: Option<PathBuf>,
    requests: Option<PathBuf>,
    modules_root: Option<PathBuf>,
}

impl InstallerConfig {
    /// An explicitly passed config path must exist and parse. The implicit
    /// `depmark.toml` may be absent, but if present it must still parse.
    pub fn load(config_path: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let file = match config_path {
            Some(path) => parse_config_file(path)?,
            None => {
                let implicit = Path::new(DEFAULT_CONFIG_PATH);
                if implicit.exists() {
                    parse_config_file(implicit)?
                } else {
                    ConfigFile::default()
                }
            }
        };

        let mut config = Self::default();
        if let Some(catalog) = file.catalog {
            config.catalog_path = catalog;
        }
        if let Some(requests) = file.requests {
            config.requests_path = requests;
        }
        if let Some(modules_root) = file.modules_root {
            config.modules_root = modules_root;
        }

        if let Some(catalog) = overrides.catalog {
            config.catalog_path = catalog;
        }
        if let Some(requests) = overrides.requests {
            config.requests_path = requests;
        }
        if let Some(modules_root) = overrides.modules_root {
            config.modules_root = modules_root;
        }

        Ok(config)
    }
}

fn parse_config_file(path: &Path) -> Result<ConfigFile> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("failed to parse config file: {}", path.display()))
}
