//! Report building and output writers.
//!
//! This module handles:
//! - Combining summaries with presentation into a report
//! - Terminal text rendering
//! - JSON report files

pub mod json;
pub mod report;
pub mod text;

// Re-export main functions
pub use json::{read_report, validate_output_path, write_report};
pub use report::{build_report, FlowAnalysis, GroupEntry, LatencyReport, RankingEntry};
pub use text::render_text;
