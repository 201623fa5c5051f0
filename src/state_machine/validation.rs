//! Answer validation

use crate::dialog::Question;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an answer was not accepted
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("answer must not be empty")]
    EmptyAnswer,
    #[error("{answer:?} is not one of {options:?}")]
    InvalidChoice { answer: String, options: Vec<String> },
}

/// Check `answer` against `question`, returning the accepted answer verbatim.
///
/// Text answers only need a non-whitespace character; choices must match an
/// option exactly, case included.
///
/// # Errors
///
/// [`ValidationError::EmptyAnswer`] for a blank text answer,
/// [`ValidationError::InvalidChoice`] for an answer outside the options.
pub fn validate(question: &Question, answer: &str) -> Result<String, ValidationError> {
    match question {
        Question::Text { .. } => {
            if answer.trim().is_empty() {
                Err(ValidationError::EmptyAnswer)
            } else {
                Ok(answer.to_string())
            }
        }
        Question::MultipleChoice { options, .. } => {
            if options.iter().any(|option| option == answer) {
                Ok(answer.to_string())
            } else {
                Err(ValidationError::InvalidChoice {
                    answer: answer.to_string(),
                    options: options.clone(),
                })
            }
        }
    }
}
