//! Dialog progress

use crate::dialog::Flow;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How far a dialog has advanced and what has been accepted so far.
///
/// Treated as a value: transitions return a new `Progress` and never touch
/// the one they were given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Index of the question currently being asked; equals the flow length
    /// once every question has been answered
    pub position: usize,
    /// Accepted answers keyed by question id
    #[serde(default)]
    pub answers: BTreeMap<String, String>,
}

impl Progress {
    /// Progress at the first question with nothing answered
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Progress one step further, with `answer` recorded for `question_id`
    #[must_use]
    pub fn advanced(&self, question_id: &str, answer: String) -> Self {
        let mut answers = self.answers.clone();
        answers.insert(question_id.to_string(), answer);
        Self {
            position: self.position + 1,
            answers,
        }
    }

    #[must_use]
    pub fn is_completed(&self, flow: &Flow) -> bool {
        self.position >= flow.len()
    }

    /// Whether this progress could have been produced by walking `flow`:
    /// the position is in range and the answers are keyed by exactly the
    /// questions before it.
    #[must_use]
    pub fn is_consistent_with(&self, flow: &Flow) -> bool {
        if self.position > flow.len() || self.answers.len() != self.position {
            return false;
        }
        flow.questions()[..self.position]
            .iter()
            .all(|q| self.answers.contains_key(q.id()))
    }
}
