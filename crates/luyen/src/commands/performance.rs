//! `luyen performance` command implementation.

use luyen_client::{PerformanceLevel, PerformanceTrend};

use super::Context;
use crate::error::CliError;

/// Show per-topic performance aggregates.
pub(crate) fn execute(ctx: &Context) -> Result<(), CliError> {
    let client = ctx.client();
    let performance = client.get_performance()?;

    if !performance.has_data {
        ctx.output
            .warning("No performance data yet. Take an exam first.");
        return Ok(());
    }

    for topic in &performance.topics {
        ctx.output.data(&format!(
            "{:<32} {:>5.1}%  {:<8} {:<9} ({} sessions)",
            topic.topic_name,
            topic.accuracy_pct,
            level_label(topic.level),
            trend_label(topic.trend),
            topic.sessions_completed
        ));
    }

    ctx.output.separator();
    ctx.output.highlight(&format!(
        "Overall: {:.1}% accuracy over {} sessions ({} questions)",
        performance.overall_accuracy,
        performance.total_sessions,
        performance.total_questions_answered
    ));

    Ok(())
}

fn level_label(level: PerformanceLevel) -> &'static str {
    match level {
        PerformanceLevel::Weak => "weak",
        PerformanceLevel::Moderate => "moderate",
        PerformanceLevel::Strong => "strong",
        PerformanceLevel::Untested => "untested",
    }
}

fn trend_label(trend: PerformanceTrend) -> &'static str {
    match trend {
        PerformanceTrend::Improving => "improving",
        PerformanceTrend::Declining => "declining",
        PerformanceTrend::Stable => "stable",
        PerformanceTrend::New => "new",
    }
}
