//! Engine identities and their trace markers.
//!
//! Each engine owns one `# Begin:`/`# End:` block in the trace and one
//! generated array in the output. Declaration order is processing order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A functional hardware block whose commands become one generated array
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Engine {
    /// Memory-management engine
    Mme,
    /// Packet-buffer manager
    Pbm,
    /// Virtual pipelines
    Vp,
    /// Network-controller accelerator
    Nca,
    /// I/O-aggregation engine
    Eioa,
    /// EIOA port enable block, always folded into [`Engine::Eioa`]
    Eioae,
    /// Synthetic identity for single-block mode
    All,
}

/// Engines in the order the classifier expects to meet them
pub const PROCESSING_ORDER: [Engine; 6] = [
    Engine::Mme,
    Engine::Pbm,
    Engine::Vp,
    Engine::Nca,
    Engine::Eioa,
    Engine::Eioae,
];

impl Engine {
    /// Prefix of the line opening this engine's block
    pub fn start_marker(self) -> Option<&'static str> {
        match self {
            Self::Mme => Some("# Begin: Engines.MME"),
            Self::Pbm => Some("# Begin: PBM"),
            Self::Vp => Some("# Begin: VirtualPipelines"),
            Self::Nca => Some("# Begin: Engines.NCA"),
            Self::Eioa => Some("# Begin: Engines.EIOA"),
            Self::Eioae => Some("# Begin: EIOA Port(s) Enable"),
            Self::All => None,
        }
    }

    /// Prefix of the line closing this engine's block
    pub fn end_marker(self) -> Option<&'static str> {
        match self {
            Self::Mme => Some("# End:   Engines.MME"),
            Self::Pbm => Some("# End:   PBM"),
            Self::Vp => Some("# End:   VirtualPipelines"),
            Self::Nca => Some("# End:   Engines.NCA"),
            Self::Eioa => Some("# End:   Engines.EIOA"),
            Self::Eioae => Some("# End:   EIOA Port(s) Enable"),
            Self::All => None,
        }
    }

    /// Base name of the `.trace`/`.c` outputs and of the generated array
    pub fn output_base(self) -> &'static str {
        match self {
            Self::Mme => "mme",
            Self::Pbm => "pbm",
            Self::Vp => "vp",
            Self::Nca => "nca",
            Self::Eioa | Self::Eioae => "eioa",
            Self::All => "all",
        }
    }

    /// Engine whose bucket absorbs this one, if any
    pub fn parent(self) -> Option<Engine> {
        match self {
            Self::Eioae => Some(Self::Eioa),
            _ => None,
        }
    }

    /// Next engine in [`PROCESSING_ORDER`]
    pub fn next_in_order(self) -> Option<Engine> {
        let pos = PROCESSING_ORDER.iter().position(|e| *e == self)?;
        PROCESSING_ORDER.get(pos + 1).copied()
    }

    /// Whether `line` opens this engine's block.
    ///
    /// The NCA header must carry exactly as many tokens as its marker, which
    /// rejects decorated headers such as `# Begin: Engines.NCAv3 (CPU)`.
    pub fn opens_block(self, line: &str) -> bool {
        let Some(marker) = self.start_marker() else {
            return false;
        };
        if !line.starts_with(marker) {
            return false;
        }
        match self {
            Self::Nca => line.split_whitespace().count() == marker.split_whitespace().count(),
            _ => true,
        }
    }

    /// Whether `line` closes this engine's block
    pub fn closes_block(self, line: &str) -> bool {
        self.end_marker().is_some_and(|marker| line.starts_with(marker))
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Mme => "MME",
            Self::Pbm => "PBM",
            Self::Vp => "VP",
            Self::Nca => "NCA",
            Self::Eioa => "EIOA",
            Self::Eioae => "EIOAE",
            Self::All => "ALL",
        };
        f.write_str(name)
    }
}
