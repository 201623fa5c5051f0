//! Caller-supplied dialog context

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Who the dialog is talking to, plus free-form host data.
///
/// The state machine never reads or changes this; it is handed back inside
/// question renderings exactly as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogContext {
    pub user_id: String,
    pub session_id: String,
    #[serde(default)]
    pub data: BTreeMap<String, String>,
}

impl DialogContext {
    pub fn new(user_id: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            session_id: session_id.into(),
            data: BTreeMap::new(),
        }
    }

    /// Copy of this context with one more data entry
    #[must_use]
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }
}
