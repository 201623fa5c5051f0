//! Terminal dialog host
//!
//! Drives a [`DialogEngine`] over line-oriented I/O: shows the current
//! question, feeds replies through the engine, applies context changes to
//! the host-owned [`DialogContext`] and persists progress after every step.

mod store;
mod traits;

pub use store::{FileSnapshotStore, MemorySnapshotStore};
pub use traits::SnapshotStore;

use crate::dialog::{DialogContext, Flow, Question};
use crate::state_machine::{Action, DialogEngine, Intention, Progress, Rendering, TransitionError};
use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::path::Path;
use thiserror::Error;

/// Context data key that `/context` requests are recorded under
pub const CONTEXT_KEY: &str = "context";

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Malformed JSON, or a flow that fails validation such as a repeated
    /// question id
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read a flow definition from a JSON file
///
/// # Errors
///
/// Fails if the file can't be read or doesn't hold a valid flow.
pub fn load_flow(path: &Path) -> Result<Flow, RuntimeError> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Outcome of one reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub intention: Intention,
    pub advanced: bool,
    /// Why an answer was not taken; `None` when it was, or when there was no
    /// answer to take
    pub rejection: Option<TransitionError>,
}

#[derive(Debug)]
pub struct DialogRuntime<S> {
    engine: DialogEngine,
    context: DialogContext,
    progress: Progress,
    store: S,
}

impl<S: SnapshotStore> DialogRuntime<S> {
    /// Resume from the store's snapshot, or start fresh if there is none
    ///
    /// # Errors
    ///
    /// Fails only if the store itself can't be read; an unreadable snapshot
    /// restarts the dialog.
    pub fn start(engine: DialogEngine, context: DialogContext, store: S) -> Result<Self, RuntimeError> {
        let progress = match store.load()? {
            Some(bytes) => engine.restore_state(&bytes),
            None => engine.initial_state(),
        };
        tracing::info!(
            user_id = %context.user_id,
            session_id = %context.session_id,
            position = progress.position,
            questions = engine.flow().len(),
            "Starting dialog"
        );
        Ok(Self {
            engine,
            context,
            progress,
            store,
        })
    }

    #[must_use]
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    #[must_use]
    pub fn context(&self) -> &DialogContext {
        &self.context
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn rendering(&self) -> Rendering {
        self.engine.render(&self.context, &self.progress)
    }

    /// Apply one raw reply
    ///
    /// # Errors
    ///
    /// Fails if the new progress can't be saved.
    pub fn handle_line(&mut self, line: &str) -> Result<Turn, RuntimeError> {
        let current_id = self
            .engine
            .flow()
            .question(self.progress.position)
            .map(|q| q.id().to_string());
        let (next, intention) = self.engine.on_response(line, &self.progress);
        let advanced = next != self.progress;

        let rejection = match (&intention, current_id) {
            _ if advanced => None,
            (Intention::ChangeContext { .. }, _) => None,
            (_, None) => Some(TransitionError::AlreadyCompleted),
            (_, Some(id)) => self
                .engine
                .try_action(&Action::from_intention(&intention, &id), &self.progress)
                .err(),
        };
        if let Some(reason) = &rejection {
            tracing::debug!(position = self.progress.position, reason = %reason, "Reply not accepted");
        }

        if let Some(data) = intention.context_data() {
            tracing::info!(data = %data, "Context change requested");
            self.context
                .data
                .insert(CONTEXT_KEY.to_string(), data.to_string());
        }

        if advanced {
            self.progress = next;
            self.store.save(&self.engine.snapshot_state(&self.progress))?;
        }

        Ok(Turn {
            intention,
            advanced,
            rejection,
        })
    }

    /// Ask questions on `output` and read replies from `input` until the
    /// dialog completes or input runs out.
    ///
    /// Returns the collected answers, or `None` if input ended first.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors or if progress can't be saved.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> Result<Option<BTreeMap<String, String>>, RuntimeError> {
        loop {
            match self.rendering() {
                Rendering::Completed { answers } => {
                    writeln!(output, "{}", serde_json::to_string_pretty(&answers)?)?;
                    output.flush()?;
                    tracing::info!(answers = answers.len(), "Dialog completed");
                    return Ok(Some(answers));
                }
                Rendering::QuestionPrompt { question, .. } => write_prompt(&mut output, &question)?,
            }
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                tracing::info!(position = self.progress.position, "Input closed before dialog completed");
                return Ok(None);
            }

            let turn = self.handle_line(&line)?;
            if let Some(reason) = &turn.rejection {
                writeln!(output, "! {reason}")?;
            }
        }
    }
}

fn write_prompt(output: &mut impl Write, question: &Question) -> io::Result<()> {
    match question {
        Question::Text { prompt, .. } => writeln!(output, "{prompt}")?,
        Question::MultipleChoice { prompt, options, .. } => {
            writeln!(output, "{prompt}")?;
            for option in options {
                writeln!(output, "  - {option}")?;
            }
        }
    }
    write!(output, "> ")
}
