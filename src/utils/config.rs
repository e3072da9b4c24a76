//! Fixed tables and constants for trace conversion.

/// Current JSON report schema version
pub const REPORT_VERSION: &str = "1.0.0";

/// Block names kept by the block filter. Everything outside these
/// `Begin:`/`End:` pairs is dropped from the reduced trace.
pub const FILTER_ALLOW_LIST: &[&str] = &[
    "Engines.MME",
    "PBM",
    "VirtualPipelines",
    "Engines.NCAv3",
    "Engines.EIOA",
    "EIOA Port(s) Enable",
];

pub const BEGIN_TAG: &str = "Begin:";
pub const END_TAG: &str = "End:";

/// Comment marker in trace files
pub const COMMENT_MARKER: char = '#';

/// Suffix of the unfiltered copy of the input trace
pub const ALL_COPY_SUFFIX: &str = "_hwio_all";
/// Suffix of the filtered (reduced) trace
pub const FILTERED_SUFFIX: &str = "_hwio";
/// Suffix of the optional tree file
pub const TREE_SUFFIX: &str = "_tree";

/// Wait inserted before every read (microseconds)
pub const READ_SETTLE_USLEEP: u32 = 1000;

/// Remark tag for values rewritten during conversion
pub const MODIFIED_TAG: &str = "XXX modified by converter";

/// Pad clock register: node 273, target 0, offset 0x4c
pub const PAD_CLOCK_NODE: u32 = 273;
pub const PAD_CLOCK_TARGET: u32 = 0;
pub const PAD_CLOCK_OFFSET: u64 = 0x4c;
/// Bit 1 gates the pad clock
pub const PAD_CLOCK_BIT: u32 = 1 << 1;
/// Human readable form used in CLI help
pub const PAD_CLOCK_ADDR: &str = "0.273.0.0x000000004c";

/// Nodes affected by incomplete-read ranges
pub const SKIP_NODES: &[u32] = &[23, 31];

/// Target 16 offsets whose traced writes are not meaningful
pub const SKIP_TARGET16_OFFSETS: &[u64] = &[160, 164, 168, 172, 176, 180, 184, 188];

/// Target 18 offsets whose traced writes are not meaningful
pub const SKIP_TARGET18_OFFSETS: &[u64] = &[
    772, 776, 836, 840, 844, 848, 852, 964, 968, 1028, 1032, 1036, 1040, 1044, 1156, 1160,
    1220, 1224, 1228, 1232, 1236, 1348, 1352, 1412, 1416, 1420, 1424, 1428,
];
