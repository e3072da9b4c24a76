//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod convert;
pub mod models;

// Re-export main command functions
pub use convert::{execute_convert, format_summary, validate_args};
pub use models::{Architecture, ConvertArgs, PadClock, RunConfig};
