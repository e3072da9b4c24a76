//! Generated C source writer.

use super::prepare_path;
use crate::converter::GeneratedSource;
use crate::utils::error::OutputError;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a generated array to a `.c` file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is invalid
pub fn write_source(source: &GeneratedSource, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    prepare_path(output_path)?;

    let content = source.to_string();
    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(content.as_bytes())
        .map_err(OutputError::WriteFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!(
        "Source written to: {} ({} records, {} bytes)",
        output_path.display(),
        source.stats.records,
        content.len()
    );

    Ok(())
}
