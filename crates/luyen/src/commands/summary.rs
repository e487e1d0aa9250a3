//! `luyen summary` command implementation.

use std::path::PathBuf;

use clap::Args;
use luyen_renderer::render;

use super::Context;
use crate::error::CliError;

/// Arguments for the summary command.
#[derive(Args)]
pub(crate) struct SummaryArgs {
    /// Topic slug (see `luyen topics`).
    slug: String,

    /// Write the HTML fragment to a file instead of stdout.
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Print the raw dialect text without rendering.
    #[arg(long)]
    raw: bool,
}

impl SummaryArgs {
    /// Execute the summary command.
    ///
    /// Fetches the topic's summary text, renders it to an HTML fragment
    /// and writes it to stdout or `--out`.
    pub(crate) fn execute(self, ctx: &Context) -> Result<(), CliError> {
        let client = ctx.client();
        let mut store = ctx.store();
        store.fetch_topics(&client)?;

        let topic = store
            .topic_by_slug(&self.slug)
            .ok_or_else(|| CliError::Validation(format!("unknown topic: {}", self.slug)))?;
        let summary = topic.summary.as_deref().ok_or_else(|| {
            CliError::Validation(format!("topic '{}' has no summary yet", self.slug))
        })?;

        let content = if self.raw {
            summary.to_owned()
        } else {
            render(summary)
        };

        match &self.out {
            Some(path) => {
                std::fs::write(path, &content)?;
                ctx.output.success(&format!("Wrote {}", path.display()));
            }
            None => ctx.output.data(&content),
        }

        Ok(())
    }
}
