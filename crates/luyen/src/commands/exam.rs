//! `luyen exam` command implementations.

use clap::{Args, Subcommand};
use luyen_client::ExamSession;

use super::Context;
use crate::error::CliError;
use crate::output::Output;

/// Exam session commands.
#[derive(Subcommand)]
pub(crate) enum ExamCommand {
    /// Start a new exam for a topic.
    Start(StartArgs),
    /// Answer a question of the exam in progress.
    Answer(AnswerArgs),
    /// Show the exam in progress and entered answers.
    Status,
    /// Submit the exam for grading.
    Submit,
    /// Abandon the exam in progress.
    Clear,
}

impl ExamCommand {
    /// Execute the exam subcommand.
    pub(crate) fn execute(self, ctx: &Context) -> Result<(), CliError> {
        match self {
            Self::Start(args) => args.execute(ctx),
            Self::Answer(args) => args.execute(ctx),
            Self::Status => status(ctx),
            Self::Submit => submit(ctx),
            Self::Clear => clear(ctx),
        }
    }
}

/// Arguments for `exam start`.
#[derive(Args)]
pub(crate) struct StartArgs {
    /// Topic slug (see `luyen topics`).
    slug: String,

    /// Number of questions (the server accepts 5-20).
    #[arg(short = 'n', long, default_value_t = 10,
          value_parser = clap::value_parser!(u32).range(5..=20))]
    num_questions: u32,
}

impl StartArgs {
    fn execute(self, ctx: &Context) -> Result<(), CliError> {
        let client = ctx.client();
        let mut store = ctx.store();

        if let Some(session) = &store.current_session
            && !session.is_completed()
        {
            ctx.output.warning(&format!(
                "Replacing exam #{} still in progress.",
                session.id
            ));
        }

        store.fetch_topics(&client)?;
        let topic = store
            .topic_by_slug(&self.slug)
            .ok_or_else(|| CliError::Validation(format!("unknown topic: {}", self.slug)))?;

        ctx.output.info(&format!(
            "Generating {} questions for \"{}\"... (this can take a while)",
            self.num_questions, topic.name
        ));
        let topic_id = topic.id;
        let session_id = store.start_exam(&client, topic_id, self.num_questions)?;

        ctx.output
            .success(&format!("Exam #{session_id} started."));
        if let Some(session) = &store.current_session {
            print_questions(&ctx.output, session, &store.user_answers);
        }
        ctx.output
            .info("Answer with: luyen exam answer <question> <letter>");
        Ok(())
    }
}

/// Arguments for `exam answer`.
#[derive(Args)]
pub(crate) struct AnswerArgs {
    /// Question number (1-based).
    question_number: u32,

    /// Chosen option letter (A-D).
    answer: String,
}

impl AnswerArgs {
    fn execute(self, ctx: &Context) -> Result<(), CliError> {
        let mut store = ctx.store();
        let answer = self.answer.to_uppercase();
        store.answer_question(self.question_number, &answer)?;

        let total = store
            .current_session
            .as_ref()
            .map_or(0, |session| session.questions.len());
        ctx.output.success(&format!(
            "Question {} -> {answer}  ({}/{total} answered)",
            self.question_number,
            store.user_answers.len()
        ));
        Ok(())
    }
}

/// Show the current session.
fn status(ctx: &Context) -> Result<(), CliError> {
    let store = ctx.store();
    let Some(session) = &store.current_session else {
        ctx.output.warning("No exam in progress.");
        return Ok(());
    };

    ctx.output.highlight(&format!(
        "Exam #{} - {} ({} questions)",
        session.id, session.topic, session.total
    ));
    if session.is_completed() {
        ctx.output.success(&format!(
            "Completed. Score: {}/{}",
            session.score.unwrap_or(0),
            session.total
        ));
        ctx.output
            .info(&format!("Review with: luyen review {}", session.id));
        return Ok(());
    }

    print_questions(&ctx.output, session, &store.user_answers);
    ctx.output.info(&format!(
        "{}/{} answered.",
        store.user_answers.len(),
        session.questions.len()
    ));
    Ok(())
}

/// Submit the current session for grading.
fn submit(ctx: &Context) -> Result<(), CliError> {
    let client = ctx.client();
    let mut store = ctx.store();

    let unanswered = store.current_session.as_ref().map_or(0, |session| {
        session
            .questions
            .iter()
            .filter(|q| !store.user_answers.contains_key(&q.id))
            .count()
    });
    if unanswered > 0 {
        ctx.output
            .warning(&format!("{unanswered} questions left unanswered."));
    }

    let graded = store.submit_exam(&client)?;
    ctx.output.separator();
    ctx.output.success(&format!(
        "Score: {}/{}",
        graded.score.unwrap_or(0),
        graded.total
    ));
    for question in &graded.questions {
        let mark = match question.is_correct {
            Some(true) => "+",
            Some(false) => "x",
            None => "-",
        };
        ctx.output.data(&format!(
            "{mark} {:>2}. {}",
            question.question_number, question.question_text
        ));
    }
    ctx.output
        .info(&format!("Explanations: luyen review {}", graded.id));
    Ok(())
}

/// Abandon the current session.
fn clear(ctx: &Context) -> Result<(), CliError> {
    let mut store = ctx.store();
    if store.current_session.is_none() {
        ctx.output.warning("No exam in progress.");
        return Ok(());
    }
    store.clear_session()?;
    ctx.output.success("Exam session cleared.");
    Ok(())
}

/// Print the questions of a session, marking entered answers.
fn print_questions(
    output: &Output,
    session: &ExamSession,
    answers: &std::collections::BTreeMap<i64, String>,
) {
    for question in &session.questions {
        output.data(&format!(
            "{:>2}. {}",
            question.question_number, question.question_text
        ));
        for (letter, text) in &question.options {
            let marker = if answers.get(&question.id) == Some(letter) {
                ">"
            } else {
                " "
            };
            output.data(&format!("   {marker} {letter}. {text}"));
        }
    }
}
