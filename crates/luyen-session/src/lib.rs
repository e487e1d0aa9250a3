//! Exam session state for the practice client.
//!
//! [`ExamStore`] is the single state container: topics, the exam in
//! progress with its accumulated answers, history and review data. It is
//! an explicit struct passed by reference — there are no globals. All
//! remote work goes through a [`PracticeClient`] handed in per call.
//!
//! The current session and the entered answers are persisted to
//! `<data_dir>/session.json` after every mutation, so an interrupted exam
//! survives a restart. Nothing else is persisted.

mod persist;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use luyen_client::{
    ApiError, ExamHistoryItem, ExamSession, PracticeClient, Question, Topic,
};

use persist::PersistedState;

/// Error from session store operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Remote API call failed.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// Failed to persist or restore session state.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Session state could not be encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The requested operation does not apply to the current state.
    #[error("{0}")]
    State(String),
}

/// State container for the practice client.
pub struct ExamStore {
    state_path: PathBuf,
    /// Topics fetched from the API (not persisted).
    pub topics: Vec<Topic>,
    /// The exam in progress, or the last graded result.
    pub current_session: Option<ExamSession>,
    /// Answers entered so far, keyed by question id.
    pub user_answers: BTreeMap<i64, String>,
    /// Past sessions (not persisted).
    pub history: Vec<ExamHistoryItem>,
    /// Graded questions of the last reviewed session (not persisted).
    pub review_questions: Vec<Question>,
}

impl ExamStore {
    /// Open the store, restoring any persisted session from `data_dir`.
    #[must_use]
    pub fn open(data_dir: &Path) -> Self {
        let state_path = data_dir.join("session.json");
        let restored = persist::load(&state_path);
        if restored.current_session.is_some() {
            debug!("restored exam session from {}", state_path.display());
        }

        Self {
            state_path,
            topics: Vec::new(),
            current_session: restored.current_session,
            user_answers: restored.user_answers,
            history: Vec::new(),
            review_questions: Vec::new(),
        }
    }

    /// Fetch and cache the topic list.
    pub fn fetch_topics(&mut self, client: &PracticeClient) -> Result<&[Topic], SessionError> {
        self.topics = client.get_topics()?;
        Ok(&self.topics)
    }

    /// Find a cached topic by its slug.
    #[must_use]
    pub fn topic_by_slug(&self, slug: &str) -> Option<&Topic> {
        self.topics.iter().find(|topic| topic.slug == slug)
    }

    /// Start a new exam, replacing any session in progress.
    ///
    /// Clears previously entered answers and persists the fresh session.
    /// Returns the new session id.
    pub fn start_exam(
        &mut self,
        client: &PracticeClient,
        topic_id: i64,
        num_questions: u32,
    ) -> Result<i64, SessionError> {
        self.user_answers.clear();
        let session = client.generate_exam(topic_id, num_questions)?;
        let id = session.id;
        self.current_session = Some(session);
        self.save()?;
        Ok(id)
    }

    /// Record an answer for a question of the current session.
    ///
    /// `question_number` is the 1-based position shown to the user.
    pub fn answer_question(
        &mut self,
        question_number: u32,
        answer: &str,
    ) -> Result<(), SessionError> {
        let session = self
            .current_session
            .as_ref()
            .ok_or_else(|| SessionError::State("no exam in progress".to_owned()))?;

        let question = session
            .questions
            .iter()
            .find(|q| q.question_number == question_number)
            .ok_or_else(|| {
                SessionError::State(format!(
                    "no question {question_number} in this exam (1..={})",
                    session.questions.len()
                ))
            })?;

        if !question.options.contains_key(answer) {
            return Err(SessionError::State(format!(
                "answer must be one of: {}",
                question.options.keys().cloned().collect::<Vec<_>>().join(", ")
            )));
        }

        self.user_answers.insert(question.id, answer.to_owned());
        self.save()
    }

    /// Submit the accumulated answers for grading.
    ///
    /// The graded session replaces the current one and stays persisted so
    /// the result can be shown again.
    pub fn submit_exam(&mut self, client: &PracticeClient) -> Result<ExamSession, SessionError> {
        let session_id = self
            .current_session
            .as_ref()
            .ok_or_else(|| SessionError::State("no exam in progress".to_owned()))?
            .id;

        let graded = client.submit_exam(session_id, &self.user_answers)?;
        self.current_session = Some(graded.clone());
        self.save()?;
        Ok(graded)
    }

    /// Fetch past sessions.
    pub fn fetch_history(
        &mut self,
        client: &PracticeClient,
    ) -> Result<&[ExamHistoryItem], SessionError> {
        self.history = client.get_history()?;
        Ok(&self.history)
    }

    /// Load an existing session as the current one.
    pub fn fetch_session(
        &mut self,
        client: &PracticeClient,
        session_id: i64,
    ) -> Result<ExamSession, SessionError> {
        let session = client.get_session(session_id)?;
        self.current_session = Some(session.clone());
        self.save()?;
        Ok(session)
    }

    /// Fetch graded questions for review.
    pub fn fetch_review(
        &mut self,
        client: &PracticeClient,
        session_id: i64,
    ) -> Result<&[Question], SessionError> {
        self.review_questions = client.get_review(session_id)?;
        Ok(&self.review_questions)
    }

    /// Drop the current session and its answers.
    pub fn clear_session(&mut self) -> Result<(), SessionError> {
        self.current_session = None;
        self.user_answers.clear();
        self.save()
    }

    /// Persist the current session and answers.
    fn save(&self) -> Result<(), SessionError> {
        let state = PersistedState {
            current_session: self.current_session.clone(),
            user_answers: self.user_answers.clone(),
        };
        persist::save(&self.state_path, &state)
    }
}
