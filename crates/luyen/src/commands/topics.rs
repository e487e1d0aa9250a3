//! `luyen topics` command implementation.

use super::Context;
use crate::error::CliError;

/// List all grammar topics.
pub(crate) fn execute(ctx: &Context) -> Result<(), CliError> {
    let client = ctx.client();
    let mut store = ctx.store();
    let topics = store.fetch_topics(&client)?;

    if topics.is_empty() {
        ctx.output.warning("No topics available.");
        return Ok(());
    }

    for topic in topics {
        let summary_marker = if topic.summary.is_some() {
            "  [summary]"
        } else {
            ""
        };
        ctx.output.data(&format!(
            "{:<24} {}{summary_marker}",
            topic.slug, topic.name
        ));
    }

    Ok(())
}
