//! Practice API client.
//!
//! Sync HTTP client for the practice backend's JSON REST API.

mod analytics;
mod exams;
mod topics;

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use ureq::Agent;

use crate::error::{self, ApiError};

/// Client for the practice API.
///
/// Cheap to construct; holds a connection-pooling [`Agent`]. The base URL
/// includes the API prefix (e.g. `http://localhost:8000/api`).
pub struct PracticeClient {
    agent: Agent,
    base_url: String,
}

impl PracticeClient {
    /// Create a client for the given base URL.
    ///
    /// The timeout applies to whole requests; exam generation is backed by
    /// an LLM on the server side and can take tens of seconds.
    #[must_use]
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Check that the API is reachable.
    pub fn health(&self) -> Result<(), ApiError> {
        self.get::<serde_json::Value>("/health").map(|_| ())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET `path` and decode the JSON response.
    pub(crate) fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!("GET {url}");

        let response = self
            .agent
            .get(&url)
            .header("Accept", "application/json")
            .call()
            .map_err(ApiError::Transport)?;

        parse_response(response)
    }

    /// POST a JSON `body` to `path` and decode the JSON response.
    pub(crate) fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!("POST {url}");

        let response = self
            .agent
            .post(&url)
            .header("Accept", "application/json")
            .send_json(body)
            .map_err(ApiError::Transport)?;

        parse_response(response)
    }
}

/// Decode a response, mapping error statuses to [`ApiError::Api`].
fn parse_response<T: DeserializeOwned>(
    response: ureq::http::Response<ureq::Body>,
) -> Result<T, ApiError> {
    let status = response.status().as_u16();
    let mut body = response.into_body();

    if status >= 400 {
        let text = body
            .read_to_string()
            .unwrap_or_else(|_| "(unable to read error body)".to_owned());
        return Err(error::from_response(status, &text));
    }

    body.read_json().map_err(ApiError::Decode)
}
