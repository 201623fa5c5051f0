//! Ordered question flows

use super::Question;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

/// Errors raised while building a flow
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("duplicate question id: {id}")]
    DuplicateQuestionId { id: String },
}

/// Descriptive flow-level data; never consulted by the state machine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowMetadata {
    /// e.g. "user_onboarding", "customer_survey"
    pub flow_type: String,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl FlowMetadata {
    pub fn new(flow_type: impl Into<String>) -> Self {
        Self {
            flow_type: flow_type.into(),
            metadata: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn priority(&self) -> Option<&str> {
        self.metadata.get("priority").map(String::as_str)
    }
}

/// An ordered, immutable list of questions
///
/// Question ids are unique within a flow; both constructors and
/// deserialization reject duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFlow")]
pub struct Flow {
    questions: Vec<Question>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<FlowMetadata>,
}

#[derive(Deserialize)]
struct RawFlow {
    questions: Vec<Question>,
    #[serde(default)]
    metadata: Option<FlowMetadata>,
}

impl TryFrom<RawFlow> for Flow {
    type Error = FlowError;

    fn try_from(raw: RawFlow) -> Result<Self, Self::Error> {
        Flow::build(raw.questions, raw.metadata)
    }
}

impl Flow {
    /// # Errors
    ///
    /// Returns [`FlowError::DuplicateQuestionId`] if two questions share an id.
    pub fn new(questions: Vec<Question>) -> Result<Self, FlowError> {
        Self::build(questions, None)
    }

    /// # Errors
    ///
    /// Returns [`FlowError::DuplicateQuestionId`] if two questions share an id.
    pub fn with_metadata(questions: Vec<Question>, metadata: FlowMetadata) -> Result<Self, FlowError> {
        Self::build(questions, Some(metadata))
    }

    fn build(questions: Vec<Question>, metadata: Option<FlowMetadata>) -> Result<Self, FlowError> {
        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(FlowError::DuplicateQuestionId {
                    id: question.id().to_string(),
                });
            }
        }
        Ok(Self { questions, metadata })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, position: usize) -> Option<&Question> {
        self.questions.get(position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn metadata(&self) -> Option<&FlowMetadata> {
        self.metadata.as_ref()
    }
}
