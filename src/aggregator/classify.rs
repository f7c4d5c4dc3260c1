//! Qualitative bands for latency and error rates.

use crate::utils::config::{
    ACCEPTABLE_BELOW_MS, DEGRADED_ERROR_RATE_BELOW, EXCELLENT_BELOW_MS, GOOD_BELOW_MS,
    HEALTHY_ERROR_RATE_BELOW,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Latency band for an average response time
///
/// Variants are ordered best first, so `Excellent < NeedsImprovement`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LatencyCategory {
    Excellent,
    Good,
    Acceptable,
    NeedsImprovement,
}

impl LatencyCategory {
    /// Classify an average latency in ms
    ///
    /// Lower bounds are inclusive: exactly 100ms is `Good`.
    pub fn classify(average_ms: f64) -> Self {
        if average_ms < EXCELLENT_BELOW_MS {
            Self::Excellent
        } else if average_ms < GOOD_BELOW_MS {
            Self::Good
        } else if average_ms < ACCEPTABLE_BELOW_MS {
            Self::Acceptable
        } else {
            Self::NeedsImprovement
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Acceptable => "Acceptable",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }

    pub fn range(&self) -> &'static str {
        match self {
            Self::Excellent => "< 100ms",
            Self::Good => "100-500ms",
            Self::Acceptable => "500-1000ms",
            Self::NeedsImprovement => "> 1000ms",
        }
    }
}

impl fmt::Display for LatencyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.range())
    }
}

/// Outcome band for a group's error rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Success,
    Issues,
    Failed,
}

impl HealthStatus {
    pub fn from_error_rate(error_rate_percent: f64) -> Self {
        if error_rate_percent < HEALTHY_ERROR_RATE_BELOW {
            Self::Success
        } else if error_rate_percent < DEGRADED_ERROR_RATE_BELOW {
            Self::Issues
        } else {
            Self::Failed
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Issues => "⚠️",
            Self::Failed => "❌",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Success => "Success",
            Self::Issues => "Issues",
            Self::Failed => "Failed",
        };
        write!(f, "{} {}", self.symbol(), name)
    }
}

/// Verdict for a two-stage flow given each stage's error rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowVerdict {
    Smooth,
    Degraded,
    Broken,
}

impl FlowVerdict {
    pub fn evaluate(first_error_rate: f64, second_error_rate: f64) -> Self {
        let worst = first_error_rate.max(second_error_rate);
        if worst < HEALTHY_ERROR_RATE_BELOW {
            Self::Smooth
        } else if worst < DEGRADED_ERROR_RATE_BELOW {
            Self::Degraded
        } else {
            Self::Broken
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Smooth => "✅",
            Self::Degraded => "⚠️",
            Self::Broken => "❌",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Smooth => "running smoothly",
            Self::Degraded => "some problems detected",
            Self::Broken => "needs repair",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(LatencyCategory::classify(0.0), LatencyCategory::Excellent);
        assert_eq!(LatencyCategory::classify(99.99), LatencyCategory::Excellent);
        assert_eq!(LatencyCategory::classify(100.0), LatencyCategory::Good);
        assert_eq!(LatencyCategory::classify(499.99), LatencyCategory::Good);
        assert_eq!(LatencyCategory::classify(500.0), LatencyCategory::Acceptable);
        assert_eq!(LatencyCategory::classify(999.99), LatencyCategory::Acceptable);
        assert_eq!(LatencyCategory::classify(1000.0), LatencyCategory::NeedsImprovement);
        assert_eq!(LatencyCategory::classify(25_000.0), LatencyCategory::NeedsImprovement);
    }

    #[test]
    fn test_classify_is_monotonic() {
        let mut previous = LatencyCategory::classify(0.0);
        for step in 0..3000 {
            let current = LatencyCategory::classify(step as f64 * 0.5);
            assert!(previous <= current);
            previous = current;
        }
    }

    #[test]
    fn test_category_display() {
        assert_eq!(LatencyCategory::Excellent.to_string(), "Excellent (< 100ms)");
        assert_eq!(LatencyCategory::Good.to_string(), "Good (100-500ms)");
        assert_eq!(
            LatencyCategory::NeedsImprovement.to_string(),
            "Needs Improvement (> 1000ms)"
        );
    }

    #[test]
    fn test_health_status_boundaries() {
        assert_eq!(HealthStatus::from_error_rate(0.0), HealthStatus::Success);
        assert_eq!(HealthStatus::from_error_rate(4.99), HealthStatus::Success);
        assert_eq!(HealthStatus::from_error_rate(5.0), HealthStatus::Issues);
        assert_eq!(HealthStatus::from_error_rate(49.9), HealthStatus::Issues);
        assert_eq!(HealthStatus::from_error_rate(50.0), HealthStatus::Failed);
        assert_eq!(HealthStatus::from_error_rate(100.0), HealthStatus::Failed);
    }

    #[test]
    fn test_flow_verdict() {
        assert_eq!(FlowVerdict::evaluate(0.0, 4.0), FlowVerdict::Smooth);
        assert_eq!(FlowVerdict::evaluate(1.0, 10.0), FlowVerdict::Degraded);
        assert_eq!(FlowVerdict::evaluate(49.0, 2.0), FlowVerdict::Degraded);
        assert_eq!(FlowVerdict::evaluate(60.0, 0.0), FlowVerdict::Broken);
    }
}
