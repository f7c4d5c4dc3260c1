//! JTL Latency
//!
//! Latency and throughput statistics for JMeter sample logs,
//! grouped by test label.
//!
//! This crate provides the core implementation for the
//! `jtl-latency` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! jtl-latency results.jtl
//! jtl-latency results.jtl --preset org --json artifacts/report.json
//! ```
//!
//! The library can also be used directly:
//!
//! ```ignore
//! use jtl_latency::aggregator::summarize;
//! use jtl_latency::parser::read_samples;
//!
//! let samples = read_samples("results.jtl")?;
//! let summaries = summarize(&samples)?;
//! for group in summaries.ranking() {
//!     println!("{}: {:.2} ms", group.label, group.summary.mean);
//! }
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod presentation;
pub mod utils;
