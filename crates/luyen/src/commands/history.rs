//! `luyen history` command implementation.

use luyen_client::ExamStatus;

use super::Context;
use crate::error::CliError;

/// List past exam sessions, newest first.
pub(crate) fn execute(ctx: &Context) -> Result<(), CliError> {
    let client = ctx.client();
    let mut store = ctx.store();
    let history = store.fetch_history(&client)?;

    if history.is_empty() {
        ctx.output.warning("No exams taken yet.");
        return Ok(());
    }

    for item in history {
        let score = match (item.status, item.score) {
            (ExamStatus::Completed, Some(score)) => format!("{score}/{}", item.total),
            _ => "in progress".to_owned(),
        };
        ctx.output.data(&format!(
            "#{:<5} {}  {:<32} {score}",
            item.id,
            item.created_at.format("%Y-%m-%d %H:%M"),
            item.topic
        ));
    }

    Ok(())
}
