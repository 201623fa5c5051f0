//! What the host should show next

use crate::dialog::{DialogContext, Question};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Rendering {
    /// Ask `question`; `context` is the one passed to render, untouched
    QuestionPrompt {
        question: Question,
        context: DialogContext,
    },
    /// Every question answered
    Completed { answers: BTreeMap<String, String> },
}

impl Rendering {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, Rendering::Completed { .. })
    }

    #[must_use]
    pub fn question(&self) -> Option<&Question> {
        match self {
            Rendering::QuestionPrompt { question, .. } => Some(question),
            Rendering::Completed { .. } => None,
        }
    }
}
