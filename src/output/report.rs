//! Report model combining computed summaries with presentation.
//!
//! The report is what both the text renderer and the JSON writer consume.
//! Schema is versioned to allow future evolution.

use crate::aggregator::{
    FlowVerdict, GroupSummary, HealthStatus, LatencyCategory, LatencySummary, OverallSummary,
    Summaries,
};
use crate::presentation::{FlowSection, Presentation};
use crate::utils::config::{REPORT_TIME_FORMAT, SCHEMA_VERSION};
use chrono::Local;
use log::debug;
use serde::{Deserialize, Serialize};

/// Top-level report structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencyReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Input file the samples were read from
    pub source: String,

    /// Local time the report was generated
    pub generated_at: String,

    pub total_samples: usize,

    pub overall: OverallSummary,

    /// Per-label results in first-occurrence order
    pub groups: Vec<GroupEntry>,

    /// Band of the overall mean latency
    pub category: LatencyCategory,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub conclusion: Option<String>,

    /// Groups ordered by ascending mean latency
    pub ranking: Vec<RankingEntry>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow: Option<FlowAnalysis>,
}

/// A group with its display name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupEntry {
    pub label: String,
    pub display_name: String,

    #[serde(flatten)]
    pub summary: LatencySummary,
}

/// One line of the ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    /// 1-based position
    pub rank: usize,
    pub label: String,
    pub display_name: String,
    pub mean: f64,
    pub error_rate_percent: f64,
    pub status: HealthStatus,
}

/// Outcome of the two-stage flow check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowAnalysis {
    pub name: String,
    pub verdict: FlowVerdict,
    pub message: String,
}

/// Build a report from summaries
///
/// **Public** - used by commands to create final output
///
/// # Arguments
/// * `summaries` - Result of `summarize`
/// * `presentation` - Display names, conclusions and optional sections
/// * `source` - Input path, recorded in the report
pub fn build_report(
    summaries: &Summaries,
    presentation: &Presentation,
    source: &str,
) -> LatencyReport {
    let groups: Vec<GroupEntry> = summaries
        .groups
        .iter()
        .map(|group| GroupEntry {
            label: group.label.clone(),
            display_name: presentation.labels.display_name(&group.label),
            summary: group.summary.clone(),
        })
        .collect();

    let ranking: Vec<RankingEntry> = summaries
        .ranking()
        .into_iter()
        .enumerate()
        .map(|(i, group)| ranking_entry(i + 1, group, presentation))
        .collect();

    let flow = presentation
        .flow
        .as_ref()
        .and_then(|section| analyze_flow(&ranking, section));

    let category = summaries.category();
    debug!("Overall category: {}", category);

    LatencyReport {
        version: SCHEMA_VERSION.to_string(),
        source: source.to_string(),
        generated_at: Local::now().format(REPORT_TIME_FORMAT).to_string(),
        total_samples: summaries.overall.count,
        overall: summaries.overall.clone(),
        groups,
        category,
        conclusion: presentation
            .conclusions
            .for_category(category)
            .map(str::to_string),
        ranking,
        flow,
    }
}

/// Convert a ranked group into a ranking line
///
/// **Private** - internal conversion
fn ranking_entry(rank: usize, group: &GroupSummary, presentation: &Presentation) -> RankingEntry {
    RankingEntry {
        rank,
        label: group.label.clone(),
        display_name: presentation.labels.display_name(&group.label),
        mean: group.summary.mean,
        error_rate_percent: group.summary.error_rate_percent,
        status: HealthStatus::from_error_rate(group.summary.error_rate_percent),
    }
}

/// Evaluate the flow from the two fastest groups
///
/// **Private** - applies only with at least three groups and when the
/// first two ranked display names carry the configured stage markers
fn analyze_flow(ranking: &[RankingEntry], section: &FlowSection) -> Option<FlowAnalysis> {
    if ranking.len() < 3 {
        return None;
    }

    let (first, second) = (&ranking[0], &ranking[1]);
    if !first.display_name.contains(&section.first_stage)
        || !second.display_name.contains(&section.second_stage)
    {
        debug!("Flow stages not found in the two fastest groups, skipping flow analysis");
        return None;
    }

    let verdict = FlowVerdict::evaluate(first.error_rate_percent, second.error_rate_percent);
    Some(FlowAnalysis {
        name: section.name.clone(),
        verdict,
        message: section.message(verdict).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(rank: usize, display_name: &str, error_rate_percent: f64) -> RankingEntry {
        RankingEntry {
            rank,
            label: display_name.to_string(),
            display_name: display_name.to_string(),
            mean: rank as f64,
            error_rate_percent,
            status: HealthStatus::from_error_rate(error_rate_percent),
        }
    }

    fn section() -> FlowSection {
        FlowSection {
            heading: "FLOW".to_string(),
            name: "PENDING → VERIFIED".to_string(),
            first_stage: "STEP 1".to_string(),
            second_stage: "STEP 2".to_string(),
            smooth: None,
            degraded: None,
            broken: None,
        }
    }

    #[test]
    fn test_analyze_flow_needs_three_groups() {
        let ranking = vec![entry(1, "STEP 1", 0.0), entry(2, "STEP 2", 0.0)];
        assert!(analyze_flow(&ranking, &section()).is_none());
    }

    #[test]
    fn test_analyze_flow_requires_stage_order() {
        let ranking = vec![
            entry(1, "STEP 2", 0.0),
            entry(2, "STEP 1", 0.0),
            entry(3, "STEP 3", 0.0),
        ];
        assert!(analyze_flow(&ranking, &section()).is_none());
    }

    #[test]
    fn test_analyze_flow_verdict() {
        let ranking = vec![
            entry(1, "📋 STEP 1: GENERATOR", 0.0),
            entry(2, "📋 STEP 2: ISSUER", 12.0),
            entry(3, "📋 STEP 3: BUYER", 90.0),
        ];
        let flow = analyze_flow(&ranking, &section()).unwrap();
        assert_eq!(flow.verdict, FlowVerdict::Degraded);
        assert_eq!(flow.message, "some problems detected");
    }
}
