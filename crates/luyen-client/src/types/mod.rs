//! Typed models for the practice API payloads.

mod analytics;
mod exam;
mod topic;

pub use analytics::{
    PerformanceInsight, PerformanceLevel, PerformanceResponse, PerformanceTrend, TopicPerformance,
};
pub use exam::{ExamHistoryItem, ExamSession, ExamStatus, Question};
pub use topic::Topic;
