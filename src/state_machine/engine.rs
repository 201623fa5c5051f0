//! In-order dialog engine
//!
//! Walks a [`Flow`] one question at a time. Every method takes the current
//! [`Progress`] explicitly and hands back a new one; the engine itself holds
//! nothing but the flow and the intention parser.

use super::intention::{IntentionDetector, IntentionParser};
use super::transition::{transition, TransitionError};
use super::{snapshot, Action, Intention, Progress, Rendering};
use crate::dialog::{DialogContext, Flow};
use std::fmt;
use std::sync::Arc;

pub struct DialogEngine {
    flow: Flow,
    parser: Arc<dyn IntentionParser>,
}

impl fmt::Debug for DialogEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogEngine")
            .field("flow", &self.flow)
            .finish_non_exhaustive()
    }
}

impl DialogEngine {
    /// Engine using the built-in [`IntentionDetector`]
    #[must_use]
    pub fn new(flow: Flow) -> Self {
        Self::with_parser(flow, IntentionDetector)
    }

    pub fn with_parser(flow: Flow, parser: impl IntentionParser + 'static) -> Self {
        Self {
            flow,
            parser: Arc::new(parser),
        }
    }

    #[must_use]
    pub fn flow(&self) -> &Flow {
        &self.flow
    }

    #[must_use]
    pub fn initial_state(&self) -> Progress {
        Progress::new()
    }

    #[must_use]
    pub fn render(&self, context: &DialogContext, progress: &Progress) -> Rendering {
        match self.flow.question(progress.position) {
            Some(question) => Rendering::QuestionPrompt {
                question: question.clone(),
                context: context.clone(),
            },
            None => Rendering::Completed {
                answers: progress.answers.clone(),
            },
        }
    }

    /// Apply `action`, or return `progress` unchanged if it can't be applied.
    ///
    /// A wrong question id, a rejected answer and a finished dialog all look
    /// the same here; use [`try_action`](Self::try_action) to tell them apart.
    #[must_use]
    pub fn on_action(&self, action: &Action, progress: &Progress) -> Progress {
        self.try_action(action, progress).unwrap_or_else(|e| {
            tracing::debug!(position = progress.position, error = %e, "Action left progress unchanged");
            progress.clone()
        })
    }

    /// # Errors
    ///
    /// See [`transition`].
    pub fn try_action(&self, action: &Action, progress: &Progress) -> Result<Progress, TransitionError> {
        transition(&self.flow, progress, action)
    }

    /// Parse a raw reply and apply it to the current question.
    ///
    /// The parsed intention is always returned, so the host can still act on
    /// a context change after the dialog has finished.
    #[must_use]
    pub fn on_response(&self, response: &str, progress: &Progress) -> (Progress, Intention) {
        let intention = self.parser.parse_intention(response);
        let next = match (&intention, self.flow.question(progress.position)) {
            (Intention::ChangeContext { data }, _) => {
                self.on_action(&Action::change_context(data.as_str()), progress)
            }
            (_, Some(question)) => {
                self.on_action(&Action::from_intention(&intention, question.id()), progress)
            }
            (_, None) => progress.clone(),
        };
        (next, intention)
    }

    #[must_use]
    pub fn snapshot_state(&self, progress: &Progress) -> Vec<u8> {
        snapshot::encode(progress)
    }

    /// Decode a snapshot, falling back to the initial state on any failure.
    ///
    /// A record that decodes but could not have come from this flow also
    /// counts as a failure: a position past the end, or answers not keyed by
    /// exactly the questions before the position. Snapshots taken from this
    /// engine always restore.
    #[must_use]
    pub fn restore_state(&self, bytes: &[u8]) -> Progress {
        snapshot::decode(bytes, &self.flow).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Discarding unreadable snapshot");
            self.initial_state()
        })
    }
}
