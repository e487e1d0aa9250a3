//! Error types for the practice API client.

use serde::Deserialize;

/// Error from practice API operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Network failure, timeout, or the server is down.
    #[error("Không thể kết nối đến máy chủ. Vui lòng thử lại.")]
    Transport(#[source] ureq::Error),

    /// Server returned an error status. The message is extracted from the
    /// FastAPI `detail` payload.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// User-facing message.
        message: String,
    },

    /// Response body was not the expected JSON shape.
    #[error("unexpected response body")]
    Decode(#[source] ureq::Error),
}

/// FastAPI error body: `detail` is a message string or a validation list.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<Detail>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Detail {
    Message(String),
    Validation(Vec<ValidationItem>),
}

#[derive(Deserialize)]
struct ValidationItem {
    msg: String,
}

/// Build an [`ApiError::Api`] from an error response body.
pub(crate) fn from_response(status: u16, body: &str) -> ApiError {
    ApiError::Api {
        status,
        message: extract_detail(status, body),
    }
}

/// Extract a user-facing message from a FastAPI error body.
fn extract_detail(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: Some(Detail::Message(message)),
        }) => message,
        Ok(ErrorBody {
            detail: Some(Detail::Validation(items)),
        }) => items
            .into_iter()
            .map(|item| item.msg)
            .collect::<Vec<_>>()
            .join("; "),
        _ => format!("Lỗi {status}: Đã xảy ra lỗi không xác định."),
    }
}
