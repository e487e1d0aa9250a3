//! `luyen review` command implementation.

use clap::Args;

use super::Context;
use crate::error::CliError;

/// Arguments for the review command.
#[derive(Args)]
pub(crate) struct ReviewArgs {
    /// Exam session id (see `luyen history`).
    session_id: i64,
}

impl ReviewArgs {
    /// Execute the review command: graded questions with explanations.
    pub(crate) fn execute(self, ctx: &Context) -> Result<(), CliError> {
        let client = ctx.client();
        let mut store = ctx.store();
        let questions = store.fetch_review(&client, self.session_id)?;

        for question in questions {
            let mark = match question.is_correct {
                Some(true) => "+",
                Some(false) => "x",
                None => "-",
            };
            ctx.output.data(&format!(
                "{mark} {:>2}. {}",
                question.question_number, question.question_text
            ));

            let user = question.user_answer.as_deref().unwrap_or("-");
            let correct = question.correct_answer.as_deref().unwrap_or("?");
            ctx.output
                .data(&format!("      your answer: {user}   correct: {correct}"));

            if let Some(explanation) = &question.explanation {
                ctx.output.data(&format!("      {explanation}"));
            }
        }

        Ok(())
    }
}
