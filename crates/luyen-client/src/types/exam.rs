//! Exam session and question models.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Lifecycle state of an exam session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExamStatus {
    InProgress,
    Completed,
}

/// A single multiple-choice question.
///
/// `correct_answer`, `is_correct` and `explanation` are omitted by the
/// server while the exam is in progress and revealed after grading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub id: i64,
    pub question_number: u32,
    pub question_text: String,
    /// Answer options keyed by letter ("A".."D").
    pub options: BTreeMap<String, String>,
    #[serde(default)]
    pub correct_answer: Option<String>,
    #[serde(default)]
    pub user_answer: Option<String>,
    #[serde(default)]
    pub is_correct: Option<bool>,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// An exam session with its questions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExamSession {
    pub id: i64,
    /// Topic name at generation time.
    pub topic: String,
    pub num_questions: u32,
    /// Number of correct answers; `None` until graded.
    pub score: Option<u32>,
    pub total: u32,
    pub status: ExamStatus,
    pub created_at: NaiveDateTime,
    pub completed_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl ExamSession {
    /// Whether the session has been submitted and graded.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == ExamStatus::Completed
    }
}

/// One entry in the exam history listing (no questions attached).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExamHistoryItem {
    pub id: i64,
    pub topic: String,
    pub score: Option<u32>,
    pub total: u32,
    pub status: ExamStatus,
    pub created_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn session_json() -> &'static str {
        r#"{
            "id": 7,
            "topic": "Thì hiện tại hoàn thành",
            "num_questions": 10,
            "score": null,
            "total": 10,
            "status": "in_progress",
            "created_at": "2026-08-01T09:30:00",
            "completed_at": null,
            "questions": [{
                "id": 41,
                "question_number": 1,
                "question_text": "She ___ here since 2019.",
                "options": {"A": "works", "B": "has worked", "C": "worked", "D": "working"}
            }]
        }"#
    }

    #[test]
    fn test_deserialize_in_progress_session() {
        let session: ExamSession = serde_json::from_str(session_json()).unwrap();
        assert_eq!(session.status, ExamStatus::InProgress);
        assert!(!session.is_completed());
        assert_eq!(session.score, None);
        assert_eq!(session.questions.len(), 1);

        let question = &session.questions[0];
        assert_eq!(question.options["B"], "has worked");
        // Hidden during an active exam.
        assert_eq!(question.correct_answer, None);
        assert_eq!(question.explanation, None);
    }

    #[test]
    fn test_deserialize_graded_question() {
        let question: Question = serde_json::from_str(
            r#"{
                "id": 41,
                "question_number": 1,
                "question_text": "She ___ here since 2019.",
                "options": {"A": "works", "B": "has worked"},
                "correct_answer": "B",
                "user_answer": "A",
                "is_correct": false,
                "explanation": "Hành động bắt đầu trong quá khứ và kéo dài đến hiện tại."
            }"#,
        )
        .unwrap();
        assert_eq!(question.correct_answer.as_deref(), Some("B"));
        assert_eq!(question.is_correct, Some(false));
    }

    #[test]
    fn test_status_round_trip() {
        assert_eq!(
            serde_json::to_string(&ExamStatus::InProgress).unwrap(),
            r#""in_progress""#
        );
        assert_eq!(
            serde_json::from_str::<ExamStatus>(r#""completed""#).unwrap(),
            ExamStatus::Completed
        );
    }

    #[test]
    fn test_history_item() {
        let item: ExamHistoryItem = serde_json::from_str(
            r#"{"id": 5, "topic": "Mạo từ", "score": 8, "total": 10,
                "status": "completed", "created_at": "2026-07-30T20:15:00"}"#,
        )
        .unwrap();
        assert_eq!(item.score, Some(8));
        assert_eq!(item.status, ExamStatus::Completed);
    }
}
