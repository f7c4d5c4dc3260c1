//! Aggregation of samples into latency and throughput statistics.
//!
//! This module transforms a parsed sample set into:
//! - Per-label summaries (first-occurrence order)
//! - An overall summary
//! - A ranking by mean latency and qualitative classifications
//!
//! Nothing here depends on what a label means; grouping is plain string
//! equality.

pub mod classify;
pub mod ranking;
pub mod stats;
pub mod summary;

// Re-export main types and functions
pub use classify::{FlowVerdict, HealthStatus, LatencyCategory};
pub use ranking::rank_by_mean;
pub use summary::{summarize, GroupSummary, LatencySummary, OverallSummary, Summaries};
