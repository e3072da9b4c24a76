//! Trace command grammars.
//!
//! Five keywords are understood. Each argument string is matched against a
//! fixed pattern; addresses are `domain.node.target.offset` with decimal
//! node/target and hex offset.

use super::generator::GeneratedSource;
use super::record::{Record, Region};
use super::skip::is_skipped_write;
use crate::commands::models::RunConfig;
use crate::utils::config::READ_SETTLE_USLEEP;
use crate::utils::error::CommandError;
use log::debug;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `domain.node.target.offset`, 4 capture groups
const ADDRESS: &str = r"(\d+)\.(\d+)\.(\d+)\.((?:0[xX])?[0-9a-fA-F]+)";

/// Compiled argument patterns.
struct Patterns {
    /// `<keyword> <args>`, leftmost match anywhere in the line
    split: Regex,
    /// `address value [value ...]`
    write: Regex,
    /// `address`
    read: Regex,
    /// `address mask value`
    modify: Regex,
    /// `duration`
    usleep: Regex,
    /// `-l loops -t timeout address mask value`
    poll: Regex,
}

static PATTERNS: LazyLock<Patterns> = LazyLock::new(|| Patterns {
    split: Regex::new(r"(\w+)\s+(.*)").unwrap(),
    write: Regex::new(&format!(r"^\s*{ADDRESS}\s+(.+?)\s*$")).unwrap(),
    read: Regex::new(&format!(r"^\s*{ADDRESS}(?:\s|$)")).unwrap(),
    modify: Regex::new(&format!(r"^\s*{ADDRESS}\s+(\S+)\s+(\S+)")).unwrap(),
    usleep: Regex::new(r"^\s*(\S+)\s*$").unwrap(),
    poll: Regex::new(&format!(
        r"^\s*-l\s+(\S+)\s+-t\s+(\S+)\s+{ADDRESS}\s+(\S+)\s+(\S+)"
    ))
    .unwrap(),
});

/// Split a command line into keyword and argument string
pub fn split_command(line: &str) -> Result<(&str, &str), CommandError> {
    let caps = PATTERNS
        .split
        .captures(line)
        .ok_or_else(|| CommandError::Unsplittable(line.to_string()))?;
    match (caps.get(1), caps.get(2)) {
        (Some(keyword), Some(args)) => Ok((keyword.as_str(), args.as_str())),
        _ => Err(CommandError::Unsplittable(line.to_string())),
    }
}

/// Command keywords understood by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Write,
    Read,
    Modify,
    Usleep,
    Poll,
}

impl std::str::FromStr for CommandKind {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "ncpWrite" => Self::Write,
            "ncpRead" => Self::Read,
            "ncpModify" => Self::Modify,
            "ncpUsleep" => Self::Usleep,
            "ncpPoll" => Self::Poll,
            other => return Err(CommandError::UnknownKeyword(other.to_string())),
        })
    }
}

impl CommandKind {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Write => "ncpWrite",
            Self::Read => "ncpRead",
            Self::Modify => "ncpModify",
            Self::Usleep => "ncpUsleep",
            Self::Poll => "ncpPoll",
        }
    }

    /// Parse the argument string for this keyword
    pub fn parse_args(self, args: &str) -> Result<Command, CommandError> {
        let mismatch = || CommandError::ArgumentMismatch {
            keyword: self.keyword().to_string(),
            args: args.to_string(),
        };

        match self {
            Self::Write => {
                let caps = PATTERNS.write.captures(args).ok_or_else(mismatch)?;
                let values = capture(&caps, 5)?
                    .split_whitespace()
                    .map(parse_hex_u32)
                    .collect::<Result<Vec<_>, _>>()?;
                let region = parse_region(&caps, 1)?;
                if region.word(values.len().saturating_sub(1)).is_none() {
                    return Err(CommandError::InvalidNumber(capture(&caps, 4)?.to_string()));
                }
                Ok(Command::Write { region, values })
            }
            Self::Read => {
                let caps = PATTERNS.read.captures(args).ok_or_else(mismatch)?;
                Ok(Command::Read {
                    region: parse_region(&caps, 1)?,
                })
            }
            Self::Modify => {
                let caps = PATTERNS.modify.captures(args).ok_or_else(mismatch)?;
                Ok(Command::Modify {
                    region: parse_region(&caps, 1)?,
                    mask: parse_hex_u32(capture(&caps, 5)?)?,
                    value: parse_hex_u32(capture(&caps, 6)?)?,
                })
            }
            Self::Usleep => {
                let caps = PATTERNS.usleep.captures(args).ok_or_else(mismatch)?;
                Ok(Command::Usleep {
                    duration: capture(&caps, 1)?.to_string(),
                })
            }
            Self::Poll => {
                let caps = PATTERNS.poll.captures(args).ok_or_else(mismatch)?;
                Ok(Command::Poll {
                    loops: capture(&caps, 1)?.to_string(),
                    timeout: capture(&caps, 2)?.to_string(),
                    region: parse_region(&caps, 3)?,
                    mask: parse_hex_u32(capture(&caps, 7)?)?,
                    value: parse_hex_u32(capture(&caps, 8)?)?,
                })
            }
        }
    }
}

/// A parsed trace command, alive only while its records are emitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Write { region: Region, values: Vec<u32> },
    Read { region: Region },
    Modify { region: Region, mask: u32, value: u32 },
    Usleep { duration: String },
    /// Loop and timeout bounds are accepted but not part of the record
    Poll {
        loops: String,
        timeout: String,
        region: Region,
        mask: u32,
        value: u32,
    },
}

impl Command {
    /// Append this command's records to `out`
    pub fn emit(&self, config: &RunConfig, out: &mut GeneratedSource) {
        match self {
            Self::Write { region, values } => {
                if is_skipped_write(region) {
                    debug!("Skipping write to {:?}", region);
                    out.note_skipped_write();
                    return;
                }
                for (index, &original) in values.iter().enumerate() {
                    let Some(word) = region.word(index) else {
                        break;
                    };
                    let value = match config.pad_clock {
                        Some(pad) if index == 0 && region.is_pad_clock() => pad.apply(original),
                        _ => original,
                    };
                    if value != original {
                        if config.verbose {
                            debug!(
                                "CHANGE: node: {}, target: {}, offset: {:08x}, old: {:08x}, new: {:08x}",
                                word.node, word.target, word.offset, original, value
                            );
                        }
                        out.push_modified(Record::Write {
                            region: word,
                            value: original,
                        });
                    }
                    out.push_record(Record::Write { region: word, value });
                }
            }
            Self::Read { region } => {
                out.push_record(Record::Usleep {
                    duration: READ_SETTLE_USLEEP.to_string(),
                });
                out.push_record(Record::Read { region: *region });
            }
            Self::Modify { region, mask, value } => out.push_record(Record::Modify {
                region: *region,
                mask: *mask,
                value: *value,
            }),
            Self::Usleep { duration } => out.push_record(Record::Usleep {
                duration: duration.clone(),
            }),
            Self::Poll {
                loops,
                timeout,
                region,
                mask,
                value,
            } => {
                debug!("Poll loops {} timeout {} not emitted", loops, timeout);
                out.push_record(Record::Poll {
                    region: *region,
                    mask: *mask,
                    value: *value,
                });
            }
        }
    }
}

fn capture<'a>(caps: &Captures<'a>, index: usize) -> Result<&'a str, CommandError> {
    caps.get(index)
        .map(|m| m.as_str())
        .ok_or_else(|| CommandError::InvalidNumber(format!("<missing group {}>", index)))
}

/// Region from the four address groups starting at `first` (domain)
fn parse_region(caps: &Captures<'_>, first: usize) -> Result<Region, CommandError> {
    Ok(Region {
        node: parse_dec_u32(capture(caps, first + 1)?)?,
        target: parse_dec_u32(capture(caps, first + 2)?)?,
        offset: parse_hex_u64(capture(caps, first + 3)?)?,
    })
}

fn parse_dec_u32(s: &str) -> Result<u32, CommandError> {
    s.parse()
        .map_err(|_| CommandError::InvalidNumber(s.to_string()))
}

fn parse_hex_u64(s: &str) -> Result<u64, CommandError> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u64::from_str_radix(digits, 16).map_err(|_| CommandError::InvalidNumber(s.to_string()))
}

fn parse_hex_u32(s: &str) -> Result<u32, CommandError> {
    let wide = parse_hex_u64(s)?;
    u32::try_from(wide).map_err(|_| CommandError::InvalidNumber(s.to_string()))
}
