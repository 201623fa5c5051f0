//! Pure state transition function
//!
//! Given the same flow, progress and action this always produces the same
//! result and performs no I/O.

use super::validation::{validate, ValidationError};
use super::{Action, Progress};
use crate::dialog::Flow;
use thiserror::Error;

/// Why an action left progress where it was
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("dialog already completed")]
    AlreadyCompleted,
    #[error("answer targets question {actual:?} but the current question is {expected:?}")]
    QuestionMismatch { expected: String, actual: String },
    #[error("answer rejected: {0}")]
    Rejected(#[from] ValidationError),
}

/// Apply `action` to `progress`.
///
/// `ChangeContext` never moves progress; acting on it is up to the caller.
///
/// # Errors
///
/// Returns a [`TransitionError`] when an answer cannot be accepted: the flow
/// is finished, the answer is for some other question, or it fails
/// validation.
pub fn transition(flow: &Flow, progress: &Progress, action: &Action) -> Result<Progress, TransitionError> {
    match action {
        Action::Answer { question_id, text }
        | Action::AnswerAndChangeContext {
            question_id, text, ..
        } => {
            let Some(question) = flow.question(progress.position) else {
                return Err(TransitionError::AlreadyCompleted);
            };
            if question.id() != question_id {
                return Err(TransitionError::QuestionMismatch {
                    expected: question.id().to_string(),
                    actual: question_id.clone(),
                });
            }
            let accepted = validate(question, text)?;
            Ok(progress.advanced(question_id, accepted))
        }
        Action::ChangeContext { .. } => Ok(progress.clone()),
    }
}
