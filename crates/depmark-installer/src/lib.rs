mod layout;
mod markers;

pub use layout::ModulesLayout;
pub use markers::{DirMarkerStore, MarkerStore};
