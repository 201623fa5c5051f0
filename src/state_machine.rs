//! Core dialog state machine
//!
//! Implements the Elm Architecture pattern with pure state transitions:
//! progress in, action or raw reply in, new progress out.

mod action;
mod engine;
mod intention;
mod progress;
mod rendering;
pub mod snapshot;
pub(crate) mod transition;
mod validation;

#[cfg(test)]
mod proptests;

pub use action::Action;
pub use engine::DialogEngine;
pub use intention::{Intention, IntentionDetector, IntentionParser};
pub use progress::Progress;
pub use rendering::Rendering;
pub use transition::{transition, TransitionError};
pub use validation::{validate, ValidationError};
