//! HTTP client for the TOEIC grammar practice API.
//!
//! Provides a sync client ([`PracticeClient`]) for the remote practice
//! backend: grammar topics, exam generation and grading, and performance
//! analytics. All endpoints speak JSON.
//!
//! The backend is a FastAPI service; error responses carry a `detail`
//! payload that is either a plain message or a validation list. The client
//! extracts a user-facing message from either form — see [`ApiError`].

mod client;
mod error;
mod types;

pub use client::PracticeClient;
pub use error::ApiError;
pub use types::{
    ExamHistoryItem, ExamSession, ExamStatus, PerformanceInsight, PerformanceLevel,
    PerformanceResponse, PerformanceTrend, Question, Topic, TopicPerformance,
};
