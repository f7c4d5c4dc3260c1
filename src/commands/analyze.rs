//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Resolves the presentation (preset or TOML file)
//! 2. Reads the JTL sample log
//! 3. Summarizes samples per label and overall
//! 4. Builds the report
//! 5. Writes the optional JSON report
//! 6. Prints the text report

use crate::aggregator::summarize;
use crate::commands::models::AnalyzeArgs;
use crate::output::{build_report, render_text, validate_output_path, write_report, LatencyReport};
use crate::parser::read_samples;
use crate::presentation::{load_presentation, Presentation};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// Nothing is printed unless every step succeeds.
///
/// # Errors
/// * Presentation file read or parse failures
/// * Input read, schema or value errors
/// * Empty input
/// * JSON write errors
pub fn execute_analyze(args: AnalyzeArgs) -> Result<()> {
    let start_time = Instant::now();

    let presentation = resolve_presentation(&args)?;
    let report = analyze(&args, &presentation)?;

    if let Some(path) = &args.output_json {
        write_report(&report, path).context("Failed to write JSON report")?;
        info!("✓ Report written to: {}", path.display());
    }

    print!("{}", render_text(&report, &presentation));

    info!(
        "Analysis completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Read, summarize and build the report without printing anything
///
/// **Public** - used by execute_analyze and tests
pub fn analyze(args: &AnalyzeArgs, presentation: &Presentation) -> Result<LatencyReport> {
    let samples = read_samples(&args.input)
        .with_context(|| format!("Failed to read samples from {}", args.input.display()))?;

    let summaries = summarize(&samples).context("Failed to summarize samples")?;
    debug!(
        "{} groups, overall mean {:.2} ms",
        summaries.groups.len(),
        summaries.overall.mean
    );

    Ok(build_report(
        &summaries,
        presentation,
        &args.input.display().to_string(),
    ))
}

/// Pick the presentation from a TOML file or the selected preset
///
/// **Public** - can be called before analyze to fail early on bad config
pub fn resolve_presentation(args: &AnalyzeArgs) -> Result<Presentation> {
    match &args.mapping {
        Some(path) => {
            info!("Using presentation from: {}", path.display());
            load_presentation(path)
                .with_context(|| format!("Failed to load presentation {}", path.display()))
        }
        None => {
            debug!("Using built-in preset: {}", args.preset);
            Ok(args.preset.presentation())
        }
    }
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
///
/// # Returns
/// Ok if arguments are valid, Err with message if not
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input file path cannot be empty");
    }

    if args.input.is_dir() {
        anyhow::bail!("Input path is a directory: {}", args.input.display());
    }

    if let Some(path) = &args.output_json {
        validate_output_path(path).context("Invalid JSON output path")?;
    }

    if let Some(path) = &args.mapping {
        if path.as_os_str().is_empty() {
            anyhow::bail!("Presentation file path cannot be empty");
        }
    }

    Ok(())
}
