//! Ranking of groups by mean latency.

use super::summary::GroupSummary;

/// Rank groups by ascending mean elapsed
///
/// **Public** - lower mean ranks first; ties keep their input order
pub fn rank_by_mean(groups: &[GroupSummary]) -> Vec<&GroupSummary> {
    let mut ranked: Vec<&GroupSummary> = groups.iter().collect();
    // sort_by is stable
    ranked.sort_by(|a, b| a.summary.mean.total_cmp(&b.summary.mean));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::summary::LatencySummary;

    fn group(label: &str, mean: f64) -> GroupSummary {
        GroupSummary {
            label: label.to_string(),
            summary: LatencySummary {
                count: 1,
                mean,
                median: mean,
                p95: mean,
                p99: mean,
                min: mean,
                max: mean,
                error_rate_percent: 0.0,
                throughput_per_second: 0.0,
            },
        }
    }

    #[test]
    fn test_rank_by_mean_stable_ties() {
        let groups = vec![group("B", 100.0), group("C", 100.0), group("A", 200.0)];
        let ranked: Vec<&str> = rank_by_mean(&groups).iter().map(|g| g.label.as_str()).collect();
        assert_eq!(ranked, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_rank_by_mean_reorders() {
        let groups = vec![group("slow", 900.0), group("fast", 10.0), group("mid", 300.0)];
        let ranked: Vec<&str> = rank_by_mean(&groups).iter().map(|g| g.label.as_str()).collect();
        assert_eq!(ranked, vec!["fast", "mid", "slow"]);
    }

    #[test]
    fn test_rank_by_mean_empty() {
        assert!(rank_by_mean(&[]).is_empty());
    }
}
