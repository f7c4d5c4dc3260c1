//! JTL sample log parsing.
//!
//! This module handles:
//! - Reading CSV-formatted JMeter result files
//! - Validating the required columns
//! - Converting rows into typed samples

pub mod jtl;
pub mod schema;

// Re-export main types
pub use jtl::{parse_samples, read_samples};
pub use schema::{Sample, SampleSet};
