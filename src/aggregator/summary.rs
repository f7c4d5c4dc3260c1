//! Per-label and overall latency summaries.
//!
//! `summarize` is the core of the crate: a pure, single-pass transform of a
//! [`SampleSet`] into one [`GroupSummary`] per distinct label plus an
//! [`OverallSummary`] over every sample.

use super::classify::LatencyCategory;
use super::ranking::rank_by_mean;
use super::stats::{mean, quantile, sorted};
use crate::parser::schema::{Sample, SampleSet};
use crate::utils::error::AggregateError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Descriptive statistics over a set of samples
///
/// **Public** - shared shape of group and overall results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencySummary {
    /// Number of samples (always at least 1)
    pub count: usize,

    /// Mean elapsed in ms
    pub mean: f64,

    /// Median elapsed in ms
    pub median: f64,

    /// 95th percentile elapsed in ms
    pub p95: f64,

    /// 99th percentile elapsed in ms
    pub p99: f64,

    /// Minimum elapsed in ms
    pub min: f64,

    /// Maximum elapsed in ms
    pub max: f64,

    /// Failed samples as a percentage of `count`
    pub error_rate_percent: f64,

    /// Samples per second over the observed timestamp window
    pub throughput_per_second: f64,
}

/// Summary over the whole sample set
pub type OverallSummary = LatencySummary;

/// Summary for one label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub label: String,

    #[serde(flatten)]
    pub summary: LatencySummary,
}

/// Result of [`summarize`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summaries {
    pub overall: OverallSummary,

    /// Groups in first-occurrence order of their label
    pub groups: Vec<GroupSummary>,
}

impl Summaries {
    /// Groups ranked by ascending mean latency
    pub fn ranking(&self) -> Vec<&GroupSummary> {
        rank_by_mean(&self.groups)
    }

    /// Latency band of the overall mean
    pub fn category(&self) -> LatencyCategory {
        LatencyCategory::classify(self.overall.mean)
    }
}

/// Summarize samples per label and overall
///
/// **Public** - main entry point for aggregation
///
/// # Errors
/// * `AggregateError::EmptyInput` - No samples to summarize
pub fn summarize(samples: &SampleSet) -> Result<Summaries, AggregateError> {
    let all: Vec<&Sample> = samples.iter().collect();
    let overall = summarize_samples(&all).ok_or(AggregateError::EmptyInput)?;

    let groups = group_by_label(samples)
        .into_iter()
        .filter_map(|(label, members)| {
            summarize_samples(&members).map(|summary| GroupSummary {
                label: label.to_string(),
                summary,
            })
        })
        .collect::<Vec<_>>();

    debug!(
        "Summarized {} samples into {} groups",
        overall.count,
        groups.len()
    );

    Ok(Summaries { overall, groups })
}

/// Partition samples by label, keeping first-occurrence order
///
/// **Private** - internal grouping step
fn group_by_label(samples: &SampleSet) -> Vec<(&str, Vec<&Sample>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&Sample>)> = Vec::new();

    for sample in samples {
        let slot = *index.entry(sample.label.as_str()).or_insert_with(|| {
            groups.push((sample.label.as_str(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(sample);
    }

    groups
}

/// Compute statistics for one slice of samples
///
/// **Private** - returns None for an empty slice
fn summarize_samples(samples: &[&Sample]) -> Option<LatencySummary> {
    let first = samples.first()?;
    let count = samples.len();

    let elapsed = sorted(samples.iter().map(|s| s.elapsed));
    let failures = samples.iter().filter(|s| !s.success).count();

    let (earliest, latest) = samples.iter().fold((first.timestamp, first.timestamp), |(lo, hi), s| {
        (lo.min(s.timestamp), hi.max(s.timestamp))
    });

    Some(LatencySummary {
        count,
        mean: mean(&elapsed),
        median: quantile(&elapsed, 0.5),
        p95: quantile(&elapsed, 0.95),
        p99: quantile(&elapsed, 0.99),
        min: elapsed[0],
        max: elapsed[count - 1],
        error_rate_percent: failures as f64 / count as f64 * 100.0,
        throughput_per_second: throughput(count, i128::from(latest) - i128::from(earliest)),
    })
}

/// Samples per second over a window in ms
///
/// **Private** - a single sample or a zero-width window has no rate. The
/// window is `i128` so the span of any two `i64` timestamps fits.
fn throughput(count: usize, window_ms: i128) -> f64 {
    if count <= 1 || window_ms <= 0 {
        0.0
    } else {
        count as f64 * 1000.0 / window_ms as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throughput_edge_cases() {
        assert_eq!(throughput(1, 1000), 0.0);
        assert_eq!(throughput(5, 0), 0.0);
        assert_eq!(throughput(2, 1000), 2.0);
        assert_eq!(throughput(10, 500), 20.0);
    }

    #[test]
    fn test_extreme_timestamps_do_not_overflow() {
        let samples = SampleSet::new(vec![
            Sample::new("a", 10.0, true, i64::MIN),
            Sample::new("a", 20.0, true, i64::MAX),
        ]);

        let result = summarize(&samples).unwrap();
        let rate = result.overall.throughput_per_second;
        assert!(rate > 0.0 && rate.is_finite());
        assert_eq!(result.groups[0].summary.throughput_per_second, rate);
    }

    #[test]
    fn test_group_by_label_first_occurrence() {
        let samples = SampleSet::new(vec![
            Sample::new("b", 1.0, true, 0),
            Sample::new("a", 2.0, true, 0),
            Sample::new("b", 3.0, true, 0),
            Sample::new("c", 4.0, true, 0),
        ]);

        let groups = group_by_label(&samples);
        let labels: Vec<&str> = groups.iter().map(|(label, _)| *label).collect();

        assert_eq!(labels, vec!["b", "a", "c"]);
        assert_eq!(groups[0].1.len(), 2);
    }

    #[test]
    fn test_summarize_samples_empty() {
        assert!(summarize_samples(&[]).is_none());
    }

    #[test]
    fn test_unsorted_timestamps_use_full_window() {
        let samples = SampleSet::new(vec![
            Sample::new("a", 10.0, true, 3000),
            Sample::new("a", 10.0, true, 1000),
            Sample::new("a", 10.0, true, 2000),
        ]);

        let result = summarize(&samples).unwrap();
        // 3 samples over 2000ms
        assert_eq!(result.groups[0].summary.throughput_per_second, 1.5);
    }
}
