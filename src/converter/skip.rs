//! Skip predicate for writes into incomplete-read hardware ranges.
//!
//! The traced values at these offsets are not meaningful, so the writes are
//! dropped. Only write commands consult this table.

use super::record::Region;
use crate::utils::config::{SKIP_NODES, SKIP_TARGET16_OFFSETS, SKIP_TARGET18_OFFSETS};

struct SkipRule {
    target: u32,
    nodes: &'static [u32],
    offsets: &'static [u64],
}

static SKIP_RULES: [SkipRule; 2] = [
    SkipRule {
        target: 16,
        nodes: SKIP_NODES,
        offsets: SKIP_TARGET16_OFFSETS,
    },
    SkipRule {
        target: 18,
        nodes: SKIP_NODES,
        offsets: SKIP_TARGET18_OFFSETS,
    },
];

/// Whether a write starting at `region` must be omitted
pub fn is_skipped_write(region: &Region) -> bool {
    SKIP_RULES.iter().any(|rule| {
        rule.target == region.target
            && rule.nodes.contains(&region.node)
            && rule.offsets.contains(&region.offset)
    })
}
