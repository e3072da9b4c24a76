//! Generated source arrays.
//!
//! Converts one engine bucket into a static `ncr_command_t` array: comments
//! become block remarks, commands become records, and the array is closed by
//! a null command.

use super::command::{split_command, CommandKind};
use super::record::{Record, SourceItem};
use crate::commands::models::RunConfig;
use crate::utils::config::{COMMENT_MARKER, MODIFIED_TAG};
use log::{debug, error, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Counters collected while converting one bucket
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Live records, excluding the terminator
    pub records: usize,
    /// Comment lines passed through
    pub comments: usize,
    /// Original values recorded before a rewritten write
    pub modified_values: usize,
    /// Writes omitted by the skip predicate
    pub skipped_writes: usize,
    /// Lines dropped for an unknown keyword or bad arguments
    pub dropped_lines: usize,
    /// Conversion stopped early on an unparsable line
    pub halted: bool,
}

/// One generated array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    /// Array identifier
    pub name: String,
    pub items: Vec<SourceItem>,
    pub stats: ConversionStats,
}

impl GeneratedSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
            stats: ConversionStats::default(),
        }
    }

    pub fn push_record(&mut self, record: Record) {
        self.stats.records += 1;
        self.items.push(SourceItem::Record(record));
    }

    /// Record the traced value of a write the converter rewrote
    pub fn push_modified(&mut self, original: Record) {
        self.stats.modified_values += 1;
        self.items
            .push(SourceItem::Remark(format!("{} {},", MODIFIED_TAG, original)));
    }

    pub fn push_comment(&mut self, text: String) {
        self.stats.comments += 1;
        self.items.push(SourceItem::Remark(text));
    }

    pub fn note_skipped_write(&mut self) {
        self.stats.skipped_writes += 1;
    }

    /// Live records in order, without remarks or the terminator
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.items.iter().filter_map(|item| match item {
            SourceItem::Record(record) => Some(record),
            SourceItem::Remark(_) => None,
        })
    }
}

impl fmt::Display for GeneratedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "static ncr_command_t {}[] = {{", self.name)?;
        for item in &self.items {
            write!(f, "{}", item)?;
        }
        writeln!(f, "\t{}", Record::Null)?;
        writeln!(f, "}};")
    }
}

/// Comment text with the marker and surrounding whitespace removed
fn comment_text(line: &str) -> &str {
    line.trim_matches(|c: char| c == COMMENT_MARKER || c.is_whitespace())
}

/// Convert one bucket of trace lines into a generated array named `name`
pub fn convert_lines<S: AsRef<str>>(name: &str, lines: &[S], config: &RunConfig) -> GeneratedSource {
    debug!("Converting {} lines into {}[]", lines.len(), name);

    let mut source = GeneratedSource::new(name);

    for line in lines {
        let line = line.as_ref().trim_end();
        if line.trim_start().is_empty() {
            continue;
        }

        if line.trim_start().starts_with(COMMENT_MARKER) {
            let text = comment_text(line);
            if !text.is_empty() {
                source.push_comment(text.to_string());
            }
            continue;
        }

        let (keyword, args) = match split_command(line) {
            Ok(split) => split,
            Err(e) => {
                error!("{}: {}, stopping conversion", name, e);
                source.stats.halted = true;
                break;
            }
        };

        let command = keyword
            .parse::<CommandKind>()
            .and_then(|kind| kind.parse_args(args));

        match command {
            Ok(command) => command.emit(config, &mut source),
            Err(e) => {
                warn!("{}: {}", name, e);
                source.stats.dropped_lines += 1;
            }
        }
    }

    debug!(
        "{}[]: {} records, {} modified, {} skipped, {} dropped",
        name,
        source.stats.records,
        source.stats.modified_values,
        source.stats.skipped_writes,
        source.stats.dropped_lines
    );

    source
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_text() {
        assert_eq!(comment_text("#  hello world  "), "hello world");
        assert_eq!(comment_text("## "), "");
    }

    #[test]
    fn test_empty_array_has_header_and_terminator() {
        let lines: [&str; 0] = [];
        let source = convert_lines("mme", &lines, &RunConfig::default());
        assert_eq!(
            source.to_string(),
            "static ncr_command_t mme[] = {\n\t{NCR_COMMAND_NULL, 0, 0, 0, 0}\n};\n"
        );
    }

    #[test]
    fn test_unsplittable_line_halts_bucket() {
        let lines = ["ncpUsleep 10", "garbage", "ncpUsleep 20"];
        let source = convert_lines("vp", &lines, &RunConfig::default());
        assert!(source.stats.halted);
        assert_eq!(source.stats.records, 1);
    }
}
