//! Configuration and constants for the CLI.

/// Current JSON report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Column names as JMeter writes them in CSV-formatted JTL files
pub const LABEL_COLUMN: &str = "label";
pub const ELAPSED_COLUMN: &str = "elapsed";
pub const SUCCESS_COLUMN: &str = "success";
pub const TIMESTAMP_COLUMN: &str = "timeStamp";

pub const REQUIRED_COLUMNS: &[&str] = &[LABEL_COLUMN, ELAPSED_COLUMN, SUCCESS_COLUMN, TIMESTAMP_COLUMN];

// Latency category upper bounds in ms (exclusive)
pub const EXCELLENT_BELOW_MS: f64 = 100.0;
pub const GOOD_BELOW_MS: f64 = 500.0;
pub const ACCEPTABLE_BELOW_MS: f64 = 1000.0;

// Error rate bounds in percent (exclusive)
pub const HEALTHY_ERROR_RATE_BELOW: f64 = 5.0;
pub const DEGRADED_ERROR_RATE_BELOW: f64 = 50.0;

/// Timestamp format used in report headers
pub const REPORT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
