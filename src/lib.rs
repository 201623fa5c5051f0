//! Stateful dialog flows
//!
//! An in-order question/answer state machine. A [`Flow`] lists the
//! questions; [`DialogEngine`] turns the current [`Progress`] plus a reply
//! into the next `Progress` and tells the host what to show. Everything in
//! [`state_machine`] is pure; [`runtime`] is a small terminal host on top.

pub mod config;
pub mod dialog;
pub mod runtime;
pub mod state_machine;

pub use dialog::{DialogContext, Flow, FlowError, FlowMetadata, Question};
pub use state_machine::{
    Action, DialogEngine, Intention, IntentionDetector, IntentionParser, Progress, Rendering,
    TransitionError, ValidationError,
};
