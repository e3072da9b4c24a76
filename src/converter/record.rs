//! Output records of the generated register command arrays.
//!
//! Every record renders as one `ncr_command_t` initializer:
//! `{ operation, region(node, target), offset, value, mask }`.

use crate::utils::config::{PAD_CLOCK_NODE, PAD_CLOCK_OFFSET, PAD_CLOCK_TARGET};
use std::fmt;

/// Hardware register address. The trace's leading domain field is not part
/// of the address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub node: u32,
    pub target: u32,
    pub offset: u64,
}

impl Region {
    pub fn new(node: u32, target: u32, offset: u64) -> Self {
        Self { node, target, offset }
    }

    /// Address of the `index`-th consecutive 32-bit word starting here,
    /// `None` past the end of the offset space
    pub fn word(self, index: usize) -> Option<Self> {
        let stride = u64::try_from(index).ok()?.checked_mul(4)?;
        Some(Self {
            offset: self.offset.checked_add(stride)?,
            ..self
        })
    }

    /// Whether this is the pad clock control register
    pub fn is_pad_clock(&self) -> bool {
        self.node == PAD_CLOCK_NODE
            && self.target == PAD_CLOCK_TARGET
            && self.offset == PAD_CLOCK_OFFSET
    }
}

/// One `ncr_command_t` entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Write { region: Region, value: u32 },
    Read { region: Region },
    Modify { region: Region, mask: u32, value: u32 },
    /// Duration is copied from the trace as written
    Usleep { duration: String },
    Poll { region: Region, mask: u32, value: u32 },
    /// Array terminator
    Null,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Write { region, value } => write!(
                f,
                "{{NCR_COMMAND_WRITE, NCP_REGION_ID({}, {}), 0x{:08x}, 0x{:08x}, 0}}",
                region.node, region.target, region.offset, value
            ),
            Self::Read { region } => write!(
                f,
                "{{NCR_COMMAND_READ, NCP_REGION_ID({}, {}), 0x{:08x}, 0, 0}}",
                region.node, region.target, region.offset
            ),
            Self::Modify { region, mask, value } => write!(
                f,
                "{{NCR_COMMAND_MODIFY, NCP_REGION_ID({}, {}), 0x{:08x}, 0x{:08x}, 0x{:08x}}}",
                region.node, region.target, region.offset, value, mask
            ),
            Self::Usleep { duration } => write!(f, "{{NCR_COMMAND_USLEEP, 0, 0, {}, 0}}", duration),
            // The boot-loader reads poll entries as (offset, mask, value)
            Self::Poll { region, mask, value } => write!(
                f,
                "{{NCR_COMMAND_POLL, NCP_REGION_ID({}, {}), 0x{:08x}, 0x{:08x}, 0x{:08x}}}",
                region.node, region.target, region.offset, mask, value
            ),
            Self::Null => f.write_str("{NCR_COMMAND_NULL, 0, 0, 0, 0}"),
        }
    }
}

/// An element of a generated array body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceItem {
    /// Block comment between entries
    Remark(String),
    Record(Record),
}

impl fmt::Display for SourceItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remark(text) => writeln!(f, "\n\t/* {} */", text.replace("*/", "* /")),
            Self::Record(record) => writeln!(f, "\t{},", record),
        }
    }
}
