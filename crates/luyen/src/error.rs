//! CLI error types.

use luyen_client::ApiError;
use luyen_config::ConfigError;
use luyen_session::SessionError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("{0}")]
    Session(#[from] SessionError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Validation(String),
}
