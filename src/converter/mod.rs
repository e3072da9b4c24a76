//! Command conversion.
//!
//! Turns an engine's trace lines into a boot-loader register command array.

pub mod command;
pub mod generator;
pub mod record;
pub mod skip;

// Re-export main types
pub use command::{split_command, Command, CommandKind};
pub use generator::{convert_lines, ConversionStats, GeneratedSource};
pub use record::{Record, Region, SourceItem};
pub use skip::is_skipped_write;
