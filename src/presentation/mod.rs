//! Report presentation settings.
//!
//! Everything that changes how a report reads without changing what is
//! computed: headings, label display names, conclusions, and the optional
//! ranking and flow sections. Built-in presets live in [`presets`]; custom
//! ones are loaded from TOML.
//!
//! # Example
//! ```toml
//! title = "🏢 MULTI-ORGANIZATION LATENCY ANALYSIS"
//! show_test_line = true
//!
//! [labels]
//! fallback = "🔧 SYSTEM"
//!
//! [labels.entries]
//! "Buyer Certificate Query" = "🏢 BUYER"
//!
//! [ranking]
//! heading = "🏆 ORGANIZATION PERFORMANCE RANKING:"
//! ```

pub mod mapping;
pub mod presets;

pub use mapping::LabelMapping;
pub use presets::Preset;

use crate::aggregator::{FlowVerdict, LatencyCategory};
use crate::utils::error::PresentationError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Complete presentation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    /// Report title line
    pub title: String,

    /// Heading printed above the per-group blocks
    #[serde(default)]
    pub group_heading: Option<String>,

    #[serde(default = "default_overall_heading")]
    pub overall_heading: String,

    #[serde(default = "default_summary_heading")]
    pub summary_heading: String,

    /// Extra line in the summary block describing the tested flow
    #[serde(default)]
    pub flow_description: Option<String>,

    /// Noun used in metric lines, e.g. "Average Response Time"
    #[serde(default = "default_metric_noun")]
    pub metric_noun: String,

    /// Label of the mean line in the summary block
    #[serde(default = "default_summary_metric_label")]
    pub summary_metric_label: String,

    /// Print `Test: <label>` under each display name
    #[serde(default)]
    pub show_test_line: bool,

    #[serde(default)]
    pub show_error_rate_in_summary: bool,

    #[serde(default)]
    pub labels: LabelMapping,

    #[serde(default)]
    pub conclusions: Conclusions,

    #[serde(default)]
    pub ranking: Option<RankingSection>,

    #[serde(default)]
    pub flow: Option<FlowSection>,

    #[serde(default)]
    pub rules: RuleWidths,
}

/// Width of the `=` rule under each section heading; 0 prints no rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleWidths {
    pub title: usize,
    pub groups: usize,
    pub overall: usize,
    pub summary: usize,
    pub ranking: usize,
    pub flow: usize,
}

impl RuleWidths {
    /// Same width under every heading
    pub fn uniform(width: usize) -> Self {
        Self {
            title: width,
            groups: width,
            overall: width,
            summary: width,
            ranking: width,
            flow: width,
        }
    }
}

impl Default for RuleWidths {
    fn default() -> Self {
        Self::uniform(60)
    }
}

/// Optional sentence per latency category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conclusions {
    pub excellent: Option<String>,
    pub good: Option<String>,
    pub acceptable: Option<String>,
    pub needs_improvement: Option<String>,
}

impl Conclusions {
    pub fn for_category(&self, category: LatencyCategory) -> Option<&str> {
        match category {
            LatencyCategory::Excellent => self.excellent.as_deref(),
            LatencyCategory::Good => self.good.as_deref(),
            LatencyCategory::Acceptable => self.acceptable.as_deref(),
            LatencyCategory::NeedsImprovement => self.needs_improvement.as_deref(),
        }
    }
}

/// Ranking section settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingSection {
    pub heading: String,

    /// Show error rate and health status per ranked group
    #[serde(default)]
    pub show_status: bool,
}

/// Two-stage flow analysis settings
///
/// The flow is checked when the two fastest groups' display names contain
/// `first_stage` and `second_stage` respectively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowSection {
    #[serde(default = "default_flow_heading")]
    pub heading: String,

    /// Flow name, e.g. "PENDING → VERIFIED"
    pub name: String,

    pub first_stage: String,
    pub second_stage: String,

    #[serde(default)]
    pub smooth: Option<String>,
    #[serde(default)]
    pub degraded: Option<String>,
    #[serde(default)]
    pub broken: Option<String>,
}

impl FlowSection {
    pub fn message(&self, verdict: FlowVerdict) -> &str {
        let custom = match verdict {
            FlowVerdict::Smooth => self.smooth.as_deref(),
            FlowVerdict::Degraded => self.degraded.as_deref(),
            FlowVerdict::Broken => self.broken.as_deref(),
        };
        custom.unwrap_or_else(|| verdict.description())
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Preset::Latency.presentation()
    }
}

fn default_overall_heading() -> String {
    "🔹 OVERALL STATISTICS".to_string()
}

fn default_summary_heading() -> String {
    "📝 SUMMARY:".to_string()
}

fn default_metric_noun() -> String {
    "Response Time".to_string()
}

fn default_summary_metric_label() -> String {
    "Average Latency".to_string()
}

fn default_flow_heading() -> String {
    "🔄 FLOW ANALYSIS:".to_string()
}

/// Load a presentation from a TOML file
///
/// # Errors
/// * `PresentationError::Io` - If file cannot be read
/// * `PresentationError::Toml` - If TOML is invalid
///
/// # Example
/// ```ignore
/// let presentation = load_presentation("org.toml")?;
/// ```
pub fn load_presentation(path: impl AsRef<Path>) -> Result<Presentation, PresentationError> {
    let path = path.as_ref();
    debug!("Loading presentation from: {}", path.display());

    let contents = fs::read_to_string(path)?;
    let presentation: Presentation = toml::from_str(&contents)?;
    Ok(presentation)
}
