//! Terminal rendering for latency reports.
//!
//! Numbers are printed with two decimals; error rates as percentages and
//! throughput in req/sec.

use super::report::{GroupEntry, LatencyReport, RankingEntry};
use crate::aggregator::LatencyCategory;
use crate::presentation::Presentation;
use colored::*;

/// Render a human-readable report for the terminal
pub fn render_text(report: &LatencyReport, presentation: &Presentation) -> String {
    let mut out = String::new();

    out.push_str(&render_header(report, presentation));
    out.push_str(&render_groups(report, presentation));
    out.push_str(&render_overall(report, presentation));
    out.push_str(&render_summary(report, presentation));
    out.push_str(&render_ranking(report, presentation));
    out.push_str(&render_flow(report, presentation));

    out
}

fn render_header(report: &LatencyReport, presentation: &Presentation) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", presentation.title.bold()));
    out.push_str(&rule('=', presentation.rules.title));
    out.push_str(&format!("🕐 Test completed at: {}\n", report.generated_at));
    out.push_str(&format!("📁 Total samples: {}\n\n", report.total_samples));
    out
}

fn render_groups(report: &LatencyReport, presentation: &Presentation) -> String {
    let mut out = String::new();

    if let Some(heading) = &presentation.group_heading {
        out.push_str(&format!("{}\n", heading.bold()));
        out.push_str(&rule('=', presentation.rules.groups));
    }

    for group in &report.groups {
        out.push_str(&render_group(group, presentation));
    }
    out
}

fn render_group(group: &GroupEntry, presentation: &Presentation) -> String {
    let noun = &presentation.metric_noun;
    let s = &group.summary;
    let mut out = String::new();

    out.push_str(&format!("{}\n", group.display_name));
    if presentation.show_test_line {
        out.push_str(&format!("   Test: {}\n", group.label));
    }
    out.push_str(&format!("   Samples: {}\n", s.count));
    out.push_str(&format!("   Average {}: {:.2} ms\n", noun, s.mean));
    out.push_str(&format!("   Median {}: {:.2} ms\n", noun, s.median));
    out.push_str(&format!("   95th Percentile: {:.2} ms\n", s.p95));
    out.push_str(&format!("   99th Percentile: {:.2} ms\n", s.p99));
    out.push_str(&format!("   Min {}: {:.2} ms\n", noun, s.min));
    out.push_str(&format!("   Max {}: {:.2} ms\n", noun, s.max));
    out.push_str(&format!("   Error Rate: {:.2}%\n", s.error_rate_percent));
    out.push_str(&format!("   Throughput: {:.2} req/sec\n\n", s.throughput_per_second));
    out
}

fn render_overall(report: &LatencyReport, presentation: &Presentation) -> String {
    let noun = &presentation.metric_noun;
    let s = &report.overall;
    let mut out = String::new();

    out.push_str(&format!("{}\n", presentation.overall_heading.bold()));
    out.push_str(&rule('=', presentation.rules.overall));
    out.push_str(&format!("   Total Average {}: {:.2} ms\n", noun, s.mean));
    out.push_str(&format!("   Total 95th Percentile: {:.2} ms\n", s.p95));
    out.push_str(&format!("   Total Error Rate: {:.2}%\n", s.error_rate_percent));
    out.push_str(&format!(
        "   Overall Throughput: {:.2} req/sec\n\n",
        s.throughput_per_second
    ));
    out
}

fn render_summary(report: &LatencyReport, presentation: &Presentation) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", presentation.summary_heading.bold()));
    out.push_str(&rule('=', presentation.rules.summary));
    if let Some(flow) = &presentation.flow_description {
        out.push_str(&format!("   Flow: {}\n", flow));
    }
    out.push_str(&format!(
        "   {}: {:.2} ms\n",
        presentation.summary_metric_label, report.overall.mean
    ));
    out.push_str(&format!("   95th Percentile Latency: {:.2} ms\n", report.overall.p95));
    if presentation.show_error_rate_in_summary {
        out.push_str(&format!(
            "   System Error Rate: {:.2}%\n",
            report.overall.error_rate_percent
        ));
    }
    out.push_str(&format!("   Latency Category: {}\n", colorize_category(report.category)));
    if let Some(conclusion) = &report.conclusion {
        out.push_str(&format!("   Conclusion: {}\n", conclusion));
    }
    out.push('\n');
    out
}

fn render_ranking(report: &LatencyReport, presentation: &Presentation) -> String {
    let mut out = String::new();
    let Some(section) = &presentation.ranking else {
        return out;
    };

    out.push_str(&format!("{}\n", section.heading.bold()));
    out.push_str(&rule('=', presentation.rules.ranking));
    for entry in &report.ranking {
        out.push_str(&render_ranking_entry(entry, section.show_status));
    }
    out.push('\n');
    out
}

fn render_ranking_entry(entry: &RankingEntry, show_status: bool) -> String {
    if show_status {
        format!(
            "   {}. {}\n      Latency: {:.2} ms | Error: {:.1}% | {}\n",
            entry.rank, entry.display_name, entry.mean, entry.error_rate_percent, entry.status
        )
    } else {
        format!(
            "   {}. {}: {:.2} ms ({})\n",
            entry.rank, entry.display_name, entry.mean, entry.label
        )
    }
}

fn render_flow(report: &LatencyReport, presentation: &Presentation) -> String {
    let mut out = String::new();
    let Some(section) = &presentation.flow else {
        return out;
    };

    out.push_str(&format!("{}\n", section.heading.bold()));
    out.push_str(&rule('=', presentation.rules.flow));
    if let Some(flow) = &report.flow {
        out.push_str(&format!(
            "   {} Flow {}: {}\n",
            flow.verdict.symbol(),
            flow.name,
            flow.message
        ));
    }
    out.push('\n');
    out
}

fn colorize_category(category: LatencyCategory) -> ColoredString {
    let text = category.to_string();
    match category {
        LatencyCategory::Excellent => text.green(),
        LatencyCategory::Good => text.cyan(),
        LatencyCategory::Acceptable => text.yellow(),
        LatencyCategory::NeedsImprovement => text.red(),
    }
}

fn rule(c: char, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    format!("{}\n", c.to_string().repeat(width))
}
