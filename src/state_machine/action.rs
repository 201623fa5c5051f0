//! Actions applied to a dialog

use super::Intention;
use serde::{Deserialize, Serialize};

/// Structured input for [`DialogEngine::on_action`](super::DialogEngine::on_action)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    Answer {
        question_id: String,
        text: String,
    },
    ChangeContext {
        data: String,
    },
    AnswerAndChangeContext {
        question_id: String,
        text: String,
        data: String,
    },
}

impl Action {
    pub fn answer(question_id: impl Into<String>, text: impl Into<String>) -> Self {
        Action::Answer {
            question_id: question_id.into(),
            text: text.into(),
        }
    }

    pub fn change_context(data: impl Into<String>) -> Self {
        Action::ChangeContext { data: data.into() }
    }

    pub fn answer_and_change_context(
        question_id: impl Into<String>,
        text: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        Action::AnswerAndChangeContext {
            question_id: question_id.into(),
            text: text.into(),
            data: data.into(),
        }
    }

    /// Build the action an intention stands for, aimed at `question_id`
    #[must_use]
    pub fn from_intention(intention: &Intention, question_id: &str) -> Self {
        match intention {
            Intention::Answer { text } => Self::answer(question_id, text.as_str()),
            Intention::ChangeContext { data } => Self::change_context(data.as_str()),
            Intention::AnswerAndChangeContext { answer, data } => {
                Self::answer_and_change_context(question_id, answer.as_str(), data.as_str())
            }
        }
    }
}
