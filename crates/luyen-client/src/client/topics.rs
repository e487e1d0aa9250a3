//! Topic operations.

use tracing::debug;

use super::PracticeClient;
use crate::error::ApiError;
use crate::types::Topic;

impl PracticeClient {
    /// List all grammar topics, ordered by name.
    pub fn get_topics(&self) -> Result<Vec<Topic>, ApiError> {
        let topics: Vec<Topic> = self.get("/topics")?;
        debug!("fetched {} topics", topics.len());
        Ok(topics)
    }
}
