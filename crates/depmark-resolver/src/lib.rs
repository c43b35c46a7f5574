mod install;
mod types;

pub use install::{install_closure, install_package};
pub use types::{DependencyStatus, InstallEvent};
