mod catalog;
mod requests;

pub use catalog::{CatalogEntry, PackageCatalog};
pub use requests::InstallRequests;
