//! Question types

use serde::{Deserialize, Serialize};

/// A single question in a flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Question {
    /// Free-form answer; anything that is not blank is accepted
    Text { id: String, prompt: String },

    /// Answer must match one of `options` exactly
    MultipleChoice {
        id: String,
        prompt: String,
        options: Vec<String>,
    },
}

impl Question {
    pub fn text(id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Question::Text {
            id: id.into(),
            prompt: prompt.into(),
        }
    }

    pub fn multiple_choice<I, S>(id: impl Into<String>, prompt: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Question::MultipleChoice {
            id: id.into(),
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Question::Text { id, .. } | Question::MultipleChoice { id, .. } => id,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        match self {
            Question::Text { prompt, .. } | Question::MultipleChoice { prompt, .. } => prompt,
        }
    }

    /// Allowed answers, empty for text questions
    #[must_use]
    pub fn options(&self) -> &[String] {
        match self {
            Question::Text { .. } => &[],
            Question::MultipleChoice { options, .. } => options,
        }
    }
}
