//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or copying trace files
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("Couldn't open file <{path}>: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read trace <{path}>: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while parsing a single trace command line
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// No `<keyword> <args>` split; stops the current bucket
    #[error("Unable to parse <{0}>")]
    Unsplittable(String),

    #[error("Unknown command <{0}> skipped")]
    UnknownKeyword(String),

    #[error("Unable to parse {keyword} arguments <{args}>")]
    ArgumentMismatch { keyword: String, args: String },

    #[error("Invalid number <{0}>")]
    InvalidNumber(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
