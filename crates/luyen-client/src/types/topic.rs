//! Grammar topic model.

use serde::{Deserialize, Serialize};

/// A grammar topic available for practice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Topic {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
    /// Summary text in the house markdown dialect, when one has been
    /// authored for the topic.
    #[serde(default)]
    pub summary: Option<String>,
}
