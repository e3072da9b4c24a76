//! Output writers for converted traces.
//!
//! This module handles writing data to disk in various formats:
//! - Raw `.trace` buckets and the intermediate trace copies
//! - Generated `.c` arrays
//! - JSON conversion reports

pub mod json;
pub mod source;
pub mod trace;

// Re-export main functions
pub use json::{read_report, write_report, ConversionReport, EngineReport};
pub use source::write_source;
pub use trace::{copy_trace, read_lines, sibling_path, write_lines};

use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Validate `path` and create its parent directories
pub(crate) fn prepare_path(path: &Path) -> Result<(), OutputError> {
    validate_path(path)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
