//! CLI command implementations.

pub(crate) mod exam;
pub(crate) mod history;
pub(crate) mod insights;
pub(crate) mod performance;
pub(crate) mod review;
pub(crate) mod summary;
pub(crate) mod topics;

use luyen_client::PracticeClient;
use luyen_config::Config;
use luyen_session::ExamStore;

use crate::output::Output;

pub(crate) use exam::ExamCommand;
pub(crate) use review::ReviewArgs;
pub(crate) use summary::SummaryArgs;

/// Shared command context: loaded configuration and terminal output.
pub(crate) struct Context {
    pub config: Config,
    pub output: Output,
}

impl Context {
    /// Create an API client from the loaded configuration.
    pub(crate) fn client(&self) -> PracticeClient {
        PracticeClient::new(&self.config.api.base_url, self.config.api.timeout())
    }

    /// Open the session store from the configured data directory.
    pub(crate) fn store(&self) -> ExamStore {
        ExamStore::open(&self.config.data_dir)
    }
}
