//! Built-in presentation presets.
//!
//! - `latency`: plain per-label report
//! - `org`: labels mapped to the organisation that issues them, with a ranking
//! - `step`: labels mapped to workflow steps, with status ranking and a
//!   PENDING → VERIFIED flow check

use super::{Conclusions, FlowSection, LabelMapping, Presentation, RankingSection, RuleWidths};
use std::fmt;
use std::str::FromStr;

/// Selectable built-in presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    #[default]
    Latency,
    Org,
    Step,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Latency, Preset::Org, Preset::Step];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Latency => "latency",
            Self::Org => "org",
            Self::Step => "step",
        }
    }

    pub fn presentation(&self) -> Presentation {
        match self {
            Self::Latency => latency(),
            Self::Org => org(),
            Self::Step => step(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|p| p.name()).collect();
                format!("unknown preset '{}', expected one of: {}", s, names.join(", "))
            })
    }
}

fn latency() -> Presentation {
    Presentation {
        title: "📊 LATENCY ANALYSIS RESULTS".to_string(),
        group_heading: None,
        overall_heading: "🔹 OVERALL STATISTICS".to_string(),
        summary_heading: "📝 FOR RESEARCH PAPER:".to_string(),
        flow_description: None,
        metric_noun: "Response Time".to_string(),
        summary_metric_label: "Average Latency".to_string(),
        show_test_line: false,
        show_error_rate_in_summary: false,
        labels: LabelMapping::new().with_fallback("🔸 {label}"),
        conclusions: Conclusions::default(),
        ranking: None,
        flow: None,
        rules: RuleWidths {
            title: 50,
            overall: 0,
            summary: 0,
            ..RuleWidths::default()
        },
    }
}

fn org() -> Presentation {
    let labels = LabelMapping::new()
        .with_entry("Generator Energy Report", "🏭 GENERATOR")
        .with_entry("Issuer Certificate Verification", "🏛️ ISSUER")
        .with_entry("Buyer Certificate Query", "🏢 BUYER")
        .with_entry("Create REC Certificate", "🏛️ ISSUER")
        .with_entry("Query All Certificates", "🏢 BUYER")
        .with_fallback("🔧 SYSTEM");

    Presentation {
        title: "🏢 MULTI-ORGANIZATION LATENCY ANALYSIS".to_string(),
        group_heading: Some("📊 LATENCY ANALYSIS PER ORGANIZATION".to_string()),
        overall_heading: "🔹 OVERALL SYSTEM STATISTICS".to_string(),
        summary_heading: "📝 FOR RESEARCH PAPER - BLOCKCHAIN REC LATENCY:".to_string(),
        flow_description: None,
        metric_noun: "Response Time".to_string(),
        summary_metric_label: "Average Transaction Latency".to_string(),
        show_test_line: true,
        show_error_rate_in_summary: false,
        labels,
        conclusions: Conclusions {
            excellent: Some("Sistem blockchain REC sangat responsif".to_string()),
            good: Some("Sistem blockchain REC responsif untuk produksi".to_string()),
            acceptable: Some("Sistem blockchain REC dapat diterima untuk produksi".to_string()),
            needs_improvement: Some("Sistem blockchain REC perlu optimisasi".to_string()),
        },
        ranking: Some(RankingSection {
            heading: "🏆 ORGANIZATION PERFORMANCE RANKING:".to_string(),
            show_status: false,
        }),
        flow: None,
        rules: RuleWidths {
            title: 60,
            groups: 60,
            overall: 40,
            summary: 50,
            ranking: 40,
            flow: 0,
        },
    }
}

fn step() -> Presentation {
    let labels = LabelMapping::new()
        .with_entry("Generator Energy Submit", "📋 STEP 1: GENERATOR (Submit)")
        .with_entry("Issuer Energy Verify", "📋 STEP 2: ISSUER (Verify)")
        .with_entry("Buyer Energy Query", "📋 STEP 3: BUYER (Query)")
        .with_entry("Energy Submit", "📋 STEP 1: GENERATOR (Submit)")
        .with_entry("Energy Verify", "📋 STEP 2: ISSUER (Verify)")
        .with_entry("Energy Query", "📋 STEP 3: BUYER (Query)")
        .with_fallback("🔧 {label}");

    Presentation {
        title: "🔄 STEP 1-2 LATENCY ANALYSIS (PENDING → VERIFIED)".to_string(),
        group_heading: Some("📊 LATENCY ANALYSIS PER STEP".to_string()),
        overall_heading: "🔹 OVERALL STEP 1-2 STATISTICS".to_string(),
        summary_heading: "📝 FOR RESEARCH PAPER - STEP 1-2 BLOCKCHAIN LATENCY:".to_string(),
        flow_description: Some("Generator Submit → Issuer Verify → Buyer Query".to_string()),
        metric_noun: "Latency".to_string(),
        summary_metric_label: "Average Transaction Latency".to_string(),
        show_test_line: false,
        show_error_rate_in_summary: true,
        labels,
        conclusions: Conclusions {
            excellent: Some("Sistem blockchain REC Step 1-2 sangat responsif".to_string()),
            good: Some("Sistem blockchain REC Step 1-2 responsif untuk produksi".to_string()),
            acceptable: Some("Sistem blockchain REC Step 1-2 dapat diterima".to_string()),
            needs_improvement: Some("Sistem blockchain REC Step 1-2 perlu optimisasi".to_string()),
        },
        ranking: Some(RankingSection {
            heading: "🏆 STEP PERFORMANCE RANKING:".to_string(),
            show_status: true,
        }),
        flow: Some(FlowSection {
            heading: "🔄 FLOW ANALYSIS:".to_string(),
            name: "PENDING → VERIFIED".to_string(),
            first_stage: "STEP 1".to_string(),
            second_stage: "STEP 2".to_string(),
            smooth: Some("Berjalan lancar".to_string()),
            degraded: Some("Ada beberapa masalah".to_string()),
            broken: Some("Perlu perbaikan".to_string()),
        }),
        rules: RuleWidths {
            title: 60,
            groups: 50,
            overall: 40,
            summary: 55,
            ranking: 35,
            flow: 20,
        },
    }
}
