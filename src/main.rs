//! HWIO Convert CLI
//!
//! Splits a hardware-initialization trace into engine blocks and writes a
//! boot-loader command array for each of them.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use hwio_convert::commands::{execute_convert, validate_args, Architecture, ConvertArgs, PadClock};
use hwio_convert::utils::config::PAD_CLOCK_ADDR;

/// HWIO Convert - trace to boot-loader command arrays
#[derive(Parser, Debug)]
#[command(name = "hwio-convert")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input trace file
    #[arg(short, long)]
    input: PathBuf,

    /// Target architecture
    #[arg(short, long, value_enum)]
    architecture: Architecture,

    #[arg(
        short = 'r',
        long = "ref-use-pad",
        alias = "ref_use_pad",
        value_parser = clap::value_parser!(u8).range(0..=1),
        help = format!("0 (disable) or 1 (enable) the PAD clock ({})", PAD_CLOCK_ADDR)
    )]
    ref_use_pad: Option<u8>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Directory for generated .trace and .c files
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Treat the filtered trace as one block (writes all.trace / all.c)
    #[arg(long)]
    single_block: bool,

    /// Output path for JSON report (optional)
    #[arg(long)]
    report: Option<PathBuf>,

    /// Print text summary to stdout
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = ConvertArgs {
        input: cli.input,
        architecture: cli.architecture,
        pad_clock: cli.ref_use_pad.and_then(PadClock::from_flag),
        verbose: cli.verbose,
        output_dir: cli.output_dir,
        single_block: cli.single_block,
        report: cli.report,
        print_summary: cli.summary,
    };

    // Validate args first
    validate_args(&args)?;

    execute_convert(&args)?;

    Ok(())
}
