//! Performance analytics models.

use serde::{Deserialize, Serialize};

/// Proficiency rating for a topic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceLevel {
    Weak,
    Moderate,
    Strong,
    Untested,
}

/// Direction of recent results for a topic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceTrend {
    Improving,
    Declining,
    Stable,
    New,
}

/// Aggregated results for one topic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopicPerformance {
    pub topic_id: i64,
    pub topic_name: String,
    pub slug: String,
    pub sessions_completed: u32,
    pub total_questions: u32,
    pub total_correct: u32,
    /// Accuracy across all answered questions, 0–100.
    pub accuracy_pct: f64,
    /// Average per-session score, 0–100.
    pub avg_score_pct: f64,
    pub level: PerformanceLevel,
    pub trend: PerformanceTrend,
    /// Score percentages of the most recent sessions (up to five).
    pub recent_scores: Vec<f64>,
}

/// Overall performance across all topics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformanceResponse {
    pub topics: Vec<TopicPerformance>,
    pub total_sessions: u32,
    pub total_questions_answered: u32,
    pub overall_accuracy: f64,
    pub has_data: bool,
}

/// AI-generated study guidance derived from performance data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformanceInsight {
    pub overall_level: String,
    pub overall_accuracy: f64,
    pub summary: String,
    pub weak_topics: Vec<String>,
    pub strong_topics: Vec<String>,
    pub recommendations: Vec<String>,
    pub study_plan: String,
}
