//! JSON conversion report.
//!
//! Summarises one run: which engines were found and what the converter did
//! with each of them.

use super::prepare_path;
use crate::converter::ConversionStats;
use crate::parser::Engine;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Report for a whole run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionReport {
    /// Report schema version
    pub version: String,
    /// Input trace path
    pub input: String,
    /// Architecture tag given on the command line
    pub architecture: String,
    /// `enable`, `disable`, or absent
    pub pad_clock: Option<String>,
    pub single_block: bool,
    pub engines: Vec<EngineReport>,
    /// ISO 8601 timestamp
    pub generated_at: String,
}

/// Per-engine section of the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineReport {
    pub engine: Engine,
    pub output_base: String,
    pub trace_lines: usize,
    pub stats: ConversionStats,
}

/// Write a report as pretty JSON
pub fn write_report(report: &ConversionReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    prepare_path(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)
        .map_err(OutputError::SerializationFailed)?;

    Ok(())
}

/// Read a report back from JSON
pub fn read_report(input_path: impl AsRef<Path>) -> Result<ConversionReport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let report = serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    Ok(report)
}
