//! CSV-formatted JTL reader.
//!
//! Reads a JMeter sample log with a header row into a [`SampleSet`].
//! Only the `label`, `elapsed`, `success` and `timeStamp` columns are
//! used; every other column is ignored.
//!
//! Header names and the numeric/boolean fields tolerate surrounding
//! whitespace. Labels are kept byte-for-byte as written, so `" Login"` and
//! `"Login"` are distinct groups.

use super::schema::{Sample, SampleSet};
use crate::utils::config::{
    ELAPSED_COLUMN, LABEL_COLUMN, REQUIRED_COLUMNS, SUCCESS_COLUMN, TIMESTAMP_COLUMN,
};
use crate::utils::error::ParseError;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Positions of the required columns within a header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnIndex {
    label: usize,
    elapsed: usize,
    success: usize,
    timestamp: usize,
}

impl ColumnIndex {
    /// Locate every required column, reporting all absent names at once
    fn resolve(headers: &StringRecord) -> Result<Self, ParseError> {
        let position = |name: &str| headers.iter().position(|h| h == name);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| position(**name).is_none())
            .map(|name| name.to_string())
            .collect();

        match (
            position(LABEL_COLUMN),
            position(ELAPSED_COLUMN),
            position(SUCCESS_COLUMN),
            position(TIMESTAMP_COLUMN),
        ) {
            (Some(label), Some(elapsed), Some(success), Some(timestamp)) => Ok(Self {
                label,
                elapsed,
                success,
                timestamp,
            }),
            _ => Err(ParseError::MissingColumns(missing)),
        }
    }

    fn sample_from(&self, record: &StringRecord) -> Result<Sample, ParseError> {
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let label = field(record, self.label, line, LABEL_COLUMN, "a label")?;
        let elapsed = field(record, self.elapsed, line, ELAPSED_COLUMN, "a number")?;
        let success = field(record, self.success, line, SUCCESS_COLUMN, "a boolean")?;
        let timestamp = field(record, self.timestamp, line, TIMESTAMP_COLUMN, "an integer")?;

        Ok(Sample::new(
            label,
            parse_elapsed(elapsed, line)?,
            parse_success(success, line)?,
            parse_timestamp(timestamp, line)?,
        ))
    }
}

/// Read a JTL file from disk
///
/// **Public** - main entry point for parsing
///
/// # Errors
/// * `ParseError::Io` - File missing or unreadable
/// * `ParseError::Csv` - Malformed CSV structure
/// * `ParseError::MissingColumns` - Required header absent
/// * `ParseError::MalformedValue` - A field failed to parse
pub fn read_samples(path: impl AsRef<Path>) -> Result<SampleSet, ParseError> {
    let path = path.as_ref();
    info!("Reading samples from: {}", path.display());

    let file = File::open(path)?;
    let samples = parse_samples(BufReader::new(file))?;

    info!("Loaded {} samples", samples.len());
    Ok(samples)
}

/// Parse JTL content from any reader
///
/// **Public** - used by `read_samples` and by tests with in-memory input
pub fn parse_samples<R: Read>(reader: R) -> Result<SampleSet, ParseError> {
    let mut rdr = ReaderBuilder::new().trim(Trim::Headers).from_reader(reader);

    let columns = ColumnIndex::resolve(rdr.headers()?)?;
    debug!("Resolved columns: {:?}", columns);

    let mut samples = Vec::new();
    for record in rdr.records() {
        let record = record?;
        samples.push(columns.sample_from(&record)?);
    }

    Ok(SampleSet::new(samples))
}

/// Fetch a field by index
///
/// **Private** - the csv reader rejects ragged rows, so a missing index is
/// still reported rather than assumed away
fn field<'r>(
    record: &'r StringRecord,
    index: usize,
    line: u64,
    column: &'static str,
    expected: &'static str,
) -> Result<&'r str, ParseError> {
    record.get(index).ok_or(ParseError::MalformedValue {
        line,
        column,
        value: String::new(),
        expected,
    })
}

/// Parse an elapsed value in milliseconds
///
/// **Private** - must be finite and non-negative
fn parse_elapsed(value: &str, line: u64) -> Result<f64, ParseError> {
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(ParseError::MalformedValue {
            line,
            column: ELAPSED_COLUMN,
            value: value.to_string(),
            expected: "a non-negative number",
        }),
    }
}

/// Parse a JMeter success flag
///
/// **Private** - JMeter writes `true`/`false`; case is ignored
fn parse_success(value: &str, line: u64) -> Result<bool, ParseError> {
    let flag = value.trim();
    if flag.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if flag.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ParseError::MalformedValue {
            line,
            column: SUCCESS_COLUMN,
            value: value.to_string(),
            expected: "true or false",
        })
    }
}

/// Parse a millisecond epoch timestamp
///
/// **Private** - internal utility
fn parse_timestamp(value: &str, line: u64) -> Result<i64, ParseError> {
    value.trim().parse::<i64>().map_err(|_| ParseError::MalformedValue {
        line,
        column: TIMESTAMP_COLUMN,
        value: value.to_string(),
        expected: "integer milliseconds since epoch",
    })
}
