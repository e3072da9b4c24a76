//! Convert command implementation.
//!
//! The convert command:
//! 1. Copies the input trace to `<input>_hwio_all`
//! 2. Filters known blocks into `<input>_hwio`
//! 3. Loads the optional tree file
//! 4. Classifies the filtered trace into engine buckets
//! 5. Converts and writes each bucket as `.trace` and `.c`
//! 6. Writes the optional report

use super::models::{ConvertArgs, RunConfig};
use crate::converter::convert_lines;
use crate::output::{copy_trace, read_lines, sibling_path, write_lines, write_report, write_source};
use crate::output::{ConversionReport, EngineReport};
use crate::parser::{capture_all, classify_from, filter_blocks, load_tree, EngineBuckets};
use crate::utils::config::{ALL_COPY_SUFFIX, FILTERED_SUFFIX, REPORT_VERSION, TREE_SUFFIX};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::Path;
use std::time::Instant;

/// Execute the convert command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Input trace cannot be opened or read
/// * Intermediate or output files cannot be written
pub fn execute_convert(args: &ConvertArgs) -> Result<ConversionReport> {
    let start_time = Instant::now();
    let config = args.run_config();

    info!("Converting trace: {}", args.input.display());
    info!("Architecture: {}", args.architecture.as_str());

    // Step 1: Keep a verbatim copy of the input
    info!("Step 1/6: Copying input trace...");
    let raw = read_lines(&args.input)
        .with_context(|| format!("Failed to read input trace {}", args.input.display()))?;
    let all_path = sibling_path(&args.input, ALL_COPY_SUFFIX);
    copy_trace(&args.input, &all_path).context("Failed to write unfiltered trace copy")?;

    // Step 2: Filter known blocks
    info!("Step 2/6: Filtering trace blocks...");
    let filtered_path = sibling_path(&args.input, FILTERED_SUFFIX);
    let reduced = filter_blocks(&raw);
    debug!("Filter kept {} of {} lines", reduced.len(), raw.len());
    write_lines(&reduced, &filtered_path).context("Failed to write filtered trace")?;

    // Step 3: Tree data
    info!("Step 3/6: Loading tree data...");
    let tree = load_tree(sibling_path(&args.input, TREE_SUFFIX));
    if config.verbose {
        debug!("PARSED DATA: PHY_ADDR: {:?}, MAXD: {}", tree.phy_addr, tree.max_dynamic);
    }

    // Step 4: Classify
    info!("Step 4/6: Classifying engine blocks...");
    let filtered = read_lines(&filtered_path)
        .with_context(|| format!("Failed to reopen filtered trace {}", filtered_path.display()))?;
    let mut buckets = if args.single_block {
        capture_all(&filtered, &config)
    } else {
        classify_from(&filtered, args.architecture.initial_engine(), &config)
    };
    buckets.merge_dependents();

    // Step 5: Convert and write
    info!("Step 5/6: Writing engine outputs...");
    let engines = write_buckets(&buckets, &config, &args.output_dir)?;

    // Step 6: Report
    let report = ConversionReport {
        version: REPORT_VERSION.to_string(),
        input: args.input.display().to_string(),
        architecture: args.architecture.as_str().to_string(),
        pad_clock: args.pad_clock.map(|p| p.as_str().to_string()),
        single_block: args.single_block,
        engines,
        generated_at: chrono::Utc::now().to_rfc3339(),
    };

    if let Some(report_path) = &args.report {
        info!("Step 6/6: Writing report...");
        write_report(&report, report_path).context("Failed to write conversion report")?;
    } else {
        info!("Step 6/6: Skipping report (not requested)");
    }

    if args.print_summary {
        println!("{}", format_summary(&report));
    }

    let elapsed = start_time.elapsed();
    info!("Conversion completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

/// Write `<base>.trace` and `<base>.c` for every bucket
///
/// **Private** - internal helper for execute_convert
fn write_buckets(
    buckets: &EngineBuckets,
    config: &RunConfig,
    output_dir: &Path,
) -> Result<Vec<EngineReport>> {
    let mut engines = Vec::with_capacity(buckets.len());

    for (engine, lines) in buckets.iter() {
        let base = engine.output_base();

        let trace_path = output_dir.join(format!("{}.trace", base));
        write_lines(lines, &trace_path)
            .with_context(|| format!("Failed to write {}", trace_path.display()))?;

        let source = convert_lines(base, lines, config);
        let source_path = output_dir.join(format!("{}.c", base));
        write_source(&source, &source_path)
            .with_context(|| format!("Failed to write {}", source_path.display()))?;

        engines.push(EngineReport {
            engine,
            output_base: base.to_string(),
            trace_lines: lines.len(),
            stats: source.stats,
        });
    }

    Ok(engines)
}

/// Text summary of a report
///
/// **Public** - printed by `--summary`
pub fn format_summary(report: &ConversionReport) -> String {
    let mut out = String::new();
    out.push_str(&"=".repeat(72));
    out.push_str("\nCONVERSION SUMMARY\n");
    out.push_str(&"=".repeat(72));
    out.push_str(&format!("\nInput:        {}\n", report.input));
    out.push_str(&format!("Architecture: {}\n", report.architecture));
    out.push_str(&format!(
        "Pad clock:    {}\n",
        report.pad_clock.as_deref().unwrap_or("unchanged")
    ));
    out.push_str(&format!(
        "{:<8} {:>8} {:>8} {:>8} {:>8} {:>8}\n",
        "engine", "lines", "records", "modified", "skipped", "dropped"
    ));
    for e in &report.engines {
        out.push_str(&format!(
            "{:<8} {:>8} {:>8} {:>8} {:>8} {:>8}{}\n",
            e.engine.to_string(),
            e.trace_lines,
            e.stats.records,
            e.stats.modified_values,
            e.stats.skipped_writes,
            e.stats.dropped_lines,
            if e.stats.halted { "  (halted)" } else { "" }
        ));
    }
    out.push_str(&"=".repeat(72));
    out
}

/// Validate convert arguments
///
/// **Public** - can be called before execute_convert for early validation
pub fn validate_args(args: &ConvertArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Provide input file for parsing");
    }

    if !args.input.is_file() {
        anyhow::bail!("Couldn't open file <{}>", args.input.display());
    }

    if args.output_dir.exists() && !args.output_dir.is_dir() {
        anyhow::bail!(
            "Output directory is not a directory: {}",
            args.output_dir.display()
        );
    }

    Ok(())
}
