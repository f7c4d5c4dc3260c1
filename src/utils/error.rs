//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while reading a JTL sample log
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read input file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed CSV input: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Line {line}: column '{column}' has value '{value}', expected {expected}")]
    MalformedValue {
        line: u64,
        column: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Errors that can occur during aggregation
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AggregateError {
    #[error("No samples found in input, statistics are undefined")]
    EmptyInput,
}

/// Errors that can occur while loading a presentation config
#[derive(Error, Debug)]
pub enum PresentationError {
    #[error("Failed to read presentation config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Presentation TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to read report {path}: {source}")]
    ReadFailed {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_lists_all() {
        let err = ParseError::MissingColumns(vec!["elapsed".to_string(), "timeStamp".to_string()]);
        assert_eq!(
            err.to_string(),
            "Missing required column(s): elapsed, timeStamp"
        );
    }

    #[test]
    fn test_read_failed_names_path() {
        let err = OutputError::ReadFailed {
            path: "out/report.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Failed to read report out/report.json: not found");
    }

    #[test]
    fn test_malformed_value_message() {
        let err = ParseError::MalformedValue {
            line: 3,
            column: "elapsed",
            value: "abc".to_string(),
            expected: "a non-negative number",
        };
        assert_eq!(
            err.to_string(),
            "Line 3: column 'elapsed' has value 'abc', expected a non-negative number"
        );
    }
}
