//! Analytics operations.

use super::PracticeClient;
use crate::error::ApiError;
use crate::types::{PerformanceInsight, PerformanceResponse};

impl PracticeClient {
    /// Fetch per-topic performance aggregates.
    pub fn get_performance(&self) -> Result<PerformanceResponse, ApiError> {
        self.get("/analytics/performance")
    }

    /// Fetch AI-generated study guidance.
    pub fn get_insights(&self) -> Result<PerformanceInsight, ApiError> {
        self.get("/analytics/insights")
    }
}
