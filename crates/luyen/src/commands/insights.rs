//! `luyen insights` command implementation.

use super::Context;
use crate::error::CliError;

/// Show AI-generated study guidance.
pub(crate) fn execute(ctx: &Context) -> Result<(), CliError> {
    let client = ctx.client();
    let insight = client.get_insights()?;

    ctx.output.highlight(&format!(
        "Overall: {} ({:.1}% accuracy)",
        insight.overall_level, insight.overall_accuracy
    ));
    ctx.output.data(&insight.summary);

    if !insight.weak_topics.is_empty() {
        ctx.output.warning(&format!(
            "Needs focus: {}",
            insight.weak_topics.join(", ")
        ));
    }
    if !insight.strong_topics.is_empty() {
        ctx.output
            .success(&format!("Strong: {}", insight.strong_topics.join(", ")));
    }

    if !insight.recommendations.is_empty() {
        ctx.output.separator();
        for recommendation in &insight.recommendations {
            ctx.output.data(&format!("- {recommendation}"));
        }
    }

    ctx.output.separator();
    ctx.output.data(&insight.study_plan);

    Ok(())
}
