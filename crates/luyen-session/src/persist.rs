//! On-disk persistence of the active exam.
//!
//! Exactly two fields survive a restart: the current session and the
//! answers entered so far. They are stored as one JSON file so an
//! interrupted exam can be resumed. Loading is fail-open (a missing or
//! corrupt file yields empty state); saving reports real errors.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use luyen_client::ExamSession;

use crate::SessionError;

/// The persisted slice of the store.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub(crate) struct PersistedState {
    pub current_session: Option<ExamSession>,
    pub user_answers: BTreeMap<i64, String>,
}

/// Load persisted state from `path`.
///
/// Missing files are normal (first run, or no exam in progress). A corrupt
/// file is logged and discarded rather than blocking startup.
pub(crate) fn load(path: &Path) -> PersistedState {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return PersistedState::default(),
    };

    match serde_json::from_str(&content) {
        Ok(state) => state,
        Err(e) => {
            tracing::warn!("discarding corrupt session state {}: {e}", path.display());
            PersistedState::default()
        }
    }
}

/// Write persisted state to `path`, creating parent directories.
pub(crate) fn save(path: &Path, state: &PersistedState) -> Result<(), SessionError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    Ok(())
}
