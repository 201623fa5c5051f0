//! Intention parsing
//!
//! A raw reply is either a plain answer or carries an embedded command:
//!
//! - `/context <data>` asks the host to change context
//! - `/answer <answer> /context <data>` answers and changes context at once
//! - anything else is a plain answer

use serde::{Deserialize, Serialize};

const CONTEXT_PREFIX: &str = "/context";
const ANSWER_PREFIX: &str = "/answer";

/// What a raw reply means
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intention {
    /// Answer to the current question
    Answer { text: String },
    /// Request for the host to change context; progress is not touched
    ChangeContext { data: String },
    /// Answer the current question, then change context
    AnswerAndChangeContext { answer: String, data: String },
}

impl Intention {
    /// Context data carried by this intention, if any
    #[must_use]
    pub fn context_data(&self) -> Option<&str> {
        match self {
            Intention::Answer { .. } => None,
            Intention::ChangeContext { data } | Intention::AnswerAndChangeContext { data, .. } => {
                Some(data)
            }
        }
    }
}

/// Turns a raw reply into an [`Intention`].
///
/// The engine holds one of these; swap it out to support a different command
/// grammar. Plain closures work too.
pub trait IntentionParser: Send + Sync {
    fn parse_intention(&self, response: &str) -> Intention;
}

impl<F> IntentionParser for F
where
    F: Fn(&str) -> Intention + Send + Sync,
{
    fn parse_intention(&self, response: &str) -> Intention {
        self(response)
    }
}

/// Default parser understanding the `/context` and `/answer` prefixes
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentionDetector;

impl IntentionParser for IntentionDetector {
    fn parse_intention(&self, response: &str) -> Intention {
        let trimmed = response.trim();

        if let Some(rest) = trimmed.strip_prefix(CONTEXT_PREFIX) {
            return Intention::ChangeContext {
                data: rest.trim().to_string(),
            };
        }

        if let Some(rest) = trimmed.strip_prefix(ANSWER_PREFIX) {
            // Without a trailing /context the whole reply, prefix included,
            // is taken as the answer.
            return match rest.split_once(CONTEXT_PREFIX) {
                Some((answer, data)) => Intention::AnswerAndChangeContext {
                    answer: answer.trim().to_string(),
                    data: data.trim().to_string(),
                },
                None => Intention::Answer {
                    text: trimmed.to_string(),
                },
            };
        }

        Intention::Answer {
            text: trimmed.to_string(),
        }
    }
}
