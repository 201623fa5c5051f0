//! Host configuration from the environment

use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_IDENTITY: &str = "local";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no flow file given (pass a path or set DIALOG_FLOW_PATH)")]
    MissingFlowPath,
}

/// Settings for the terminal dialog host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogConfig {
    /// JSON file holding the flow to run
    pub flow_path: Option<PathBuf>,
    /// Where progress is persisted between runs; in-memory when unset
    pub snapshot_path: Option<PathBuf>,
    pub user_id: String,
    pub session_id: String,
}

impl DialogConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; empty values count as unset
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            flow_path: get("DIALOG_FLOW_PATH").map(PathBuf::from),
            snapshot_path: get("DIALOG_SNAPSHOT_PATH").map(PathBuf::from),
            user_id: get("DIALOG_USER_ID").unwrap_or_else(|| DEFAULT_IDENTITY.to_string()),
            session_id: get("DIALOG_SESSION_ID").unwrap_or_else(|| DEFAULT_IDENTITY.to_string()),
        }
    }

    /// Override the flow path, e.g. from a command-line argument
    #[must_use]
    pub fn with_flow_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.flow_path = path;
        }
        self
    }

    /// # Errors
    ///
    /// [`ConfigError::MissingFlowPath`] if no flow file was configured.
    pub fn flow_path(&self) -> Result<&Path, ConfigError> {
        self.flow_path.as_deref().ok_or(ConfigError::MissingFlowPath)
    }
}
