use crate::parser::Engine;
use crate::utils::config::PAD_CLOCK_BIT;
use clap::ValueEnum;
use std::path::PathBuf;

/// Target system-on-chip family
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Architecture {
    #[value(name = "5600")]
    Acp5600,
    #[value(name = "6700")]
    Axc6700,
    #[value(name = "all")]
    All,
}

impl Architecture {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Acp5600 => "5600",
            Self::Axc6700 => "6700",
            Self::All => "all",
        }
    }

    /// Engine the classifier starts looking for
    pub fn initial_engine(self) -> Engine {
        match self {
            Self::Acp5600 | Self::Axc6700 | Self::All => Engine::Mme,
        }
    }
}

/// Pad clock override applied to the pad clock register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadClock {
    Enable,
    Disable,
}

impl PadClock {
    /// `1` enables, `0` disables, anything else leaves the trace untouched
    pub fn from_flag(flag: u8) -> Option<Self> {
        match flag {
            1 => Some(Self::Enable),
            0 => Some(Self::Disable),
            _ => None,
        }
    }

    pub fn apply(self, value: u32) -> u32 {
        match self {
            Self::Enable => value | PAD_CLOCK_BIT,
            Self::Disable => value & !PAD_CLOCK_BIT,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enable => "enable",
            Self::Disable => "disable",
        }
    }
}

/// Run-wide options handed to the classifier and converter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub pad_clock: Option<PadClock>,
    /// Log per-line classifier state and value rewrites
    pub verbose: bool,
}

/// Arguments for the convert command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ConvertArgs {
    /// Input trace file
    pub input: PathBuf,

    /// Target architecture
    pub architecture: Architecture,

    /// Optional pad clock override
    pub pad_clock: Option<PadClock>,

    /// Verbose diagnostics
    pub verbose: bool,

    /// Directory receiving `.trace` and `.c` outputs
    pub output_dir: PathBuf,

    /// Treat the filtered trace as one undivided block
    pub single_block: bool,

    /// Path for the JSON report (optional)
    pub report: Option<PathBuf>,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for ConvertArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            architecture: Architecture::All,
            pad_clock: None,
            verbose: false,
            output_dir: PathBuf::from("."),
            single_block: false,
            report: None,
            print_summary: false,
        }
    }
}

impl ConvertArgs {
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            pad_clock: self.pad_clock,
            verbose: self.verbose,
        }
    }
}
