//! JTL Latency CLI
//!
//! Reads a JMeter sample log and prints latency and throughput
//! statistics per test label.

use clap::Parser;
use env_logger::Env;
use log::debug;
use std::path::PathBuf;
use std::process::ExitCode;

use jtl_latency::commands::{
    display_presets, display_usage, execute_analyze, validate_args, AnalyzeArgs,
};
use jtl_latency::presentation::Preset;

/// JTL Latency - latency statistics for JMeter results
#[derive(Parser, Debug)]
#[command(name = "jtl-latency")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the JTL (CSV) sample log
    file: Option<PathBuf>,

    /// Built-in presentation preset (latency, org, step)
    #[arg(short, long, default_value = "latency", env = "JTL_LATENCY_PRESET")]
    preset: Preset,

    /// Presentation TOML file (overrides --preset)
    #[arg(short, long)]
    mapping: Option<PathBuf>,

    /// Output path for a JSON report
    #[arg(short, long)]
    json: Option<PathBuf>,

    /// List built-in presets and exit
    #[arg(long)]
    list_presets: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    if cli.list_presets {
        display_presets();
        return ExitCode::SUCCESS;
    }

    let Some(input) = cli.file else {
        display_usage();
        return ExitCode::SUCCESS;
    };

    let args = AnalyzeArgs {
        input,
        preset: cli.preset,
        mapping: cli.mapping,
        output_json: cli.json,
    };
    debug!("Arguments: {:?}", args);

    let result = validate_args(&args).and_then(|()| execute_analyze(args));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error analyzing results: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
