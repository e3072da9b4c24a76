//! Tree file data source.
//!
//! A configuration tool may leave a `<input>_tree` file next to the trace
//! describing shared memory pools. Nothing in the conversion depends on it
//! yet, so loading always yields the empty default and never fails.

use log::debug;
use serde::Serialize;
use std::path::Path;

/// Values the tree file can supply
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreeData {
    /// `SharedMemoryPool` physical base addresses
    pub phy_addr: Vec<u64>,
    /// `maxDynamic` setting
    pub max_dynamic: u64,
}

/// Load tree data for a run. Absence of the file is not an error.
pub fn load_tree(path: impl AsRef<Path>) -> TreeData {
    let path = path.as_ref();
    if path.exists() {
        debug!("Tree file present but not consumed: {}", path.display());
    } else {
        debug!("No tree file at {}", path.display());
    }
    TreeData::default()
}
