//! Dialog definitions
//!
//! Inert data the state machine walks over: questions, the flow that orders
//! them, and the caller-owned context passed through on every render.

mod context;
mod flow;
mod question;

pub use context::DialogContext;
pub use flow::{Flow, FlowError, FlowMetadata};
pub use question::Question;
