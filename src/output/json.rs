//! JSON report files.
//!
//! Reports are written as pretty-printed JSON and read back with serde.

use super::report::LatencyReport;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write a report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let report = build_report(&summaries, &presentation, "results.jtl");
/// write_report(&report, "report.json")?;
/// ```
pub fn write_report(report: &LatencyReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    validate_output_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let mut writer = BufWriter::new(File::create(output_path)?);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush()?;

    let bytes = std::fs::metadata(output_path).map(|m| m.len()).unwrap_or(0);
    info!("Report written ({} bytes)", bytes);

    Ok(())
}

/// Validate that output path is writable
///
/// **Public** - also used for early argument validation
pub fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Load a previously written report
///
/// # Errors
/// * `OutputError::ReadFailed` - File missing or unreadable
/// * `OutputError::SerializationFailed` - Not a valid report
pub fn read_report(input_path: impl AsRef<Path>) -> Result<LatencyReport, OutputError> {
    let input_path = input_path.as_ref();
    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path).map_err(|source| OutputError::ReadFailed {
        path: input_path.display().to_string(),
        source,
    })?;
    let report: LatencyReport = serde_json::from_reader(BufReader::new(file))?;

    debug!("Loaded report v{} with {} groups", report.version, report.groups.len());
    Ok(report)
}
