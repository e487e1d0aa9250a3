//! Exam operations.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::info;

use super::PracticeClient;
use crate::error::ApiError;
use crate::types::{ExamHistoryItem, ExamSession, Question};

#[derive(Serialize)]
struct GenerateRequest {
    topic_id: i64,
    num_questions: u32,
}

#[derive(Serialize)]
struct SubmitRequest<'a> {
    answers: &'a BTreeMap<i64, String>,
}

impl PracticeClient {
    /// Generate a new exam for a topic.
    ///
    /// The server accepts 5–20 questions per exam. Generation may take tens
    /// of seconds when the question bank has to be topped up by the LLM.
    pub fn generate_exam(
        &self,
        topic_id: i64,
        num_questions: u32,
    ) -> Result<ExamSession, ApiError> {
        info!("generating exam: topic_id={topic_id}, num_questions={num_questions}");
        self.post(
            "/exams/generate",
            &GenerateRequest {
                topic_id,
                num_questions,
            },
        )
    }

    /// Submit answers for grading and get the graded session back.
    pub fn submit_exam(
        &self,
        session_id: i64,
        answers: &BTreeMap<i64, String>,
    ) -> Result<ExamSession, ApiError> {
        info!("submitting exam {session_id} with {} answers", answers.len());
        self.post(
            &format!("/exams/{session_id}/submit"),
            &SubmitRequest { answers },
        )
    }

    /// List past exam sessions, newest first.
    pub fn get_history(&self) -> Result<Vec<ExamHistoryItem>, ApiError> {
        self.get("/exams/history")
    }

    /// Fetch one exam session with its questions.
    pub fn get_session(&self, session_id: i64) -> Result<ExamSession, ApiError> {
        self.get(&format!("/exams/{session_id}"))
    }

    /// Fetch the graded questions of a completed session, with correct
    /// answers and explanations revealed.
    pub fn get_review(&self, session_id: i64) -> Result<Vec<Question>, ApiError> {
        self.get(&format!("/exams/{session_id}/review"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_generate_request_shape() {
        let request = GenerateRequest {
            topic_id: 3,
            num_questions: 10,
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"topic_id":3,"num_questions":10}"#
        );
    }

    #[test]
    fn test_submit_request_serializes_answer_map() {
        let mut answers = BTreeMap::new();
        answers.insert(41, "B".to_owned());
        answers.insert(42, "D".to_owned());
        let request = SubmitRequest { answers: &answers };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"answers":{"41":"B","42":"D"}}"#
        );
    }
}
