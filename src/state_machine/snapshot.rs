//! Snapshot encoding for progress
//!
//! Snapshots are UTF-8 JSON: `{"position": 1, "answers": {"name": "Bob"}}`.

use super::Progress;
use crate::dialog::Flow;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("snapshot is not a progress record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("snapshot at position {position} does not fit a flow of {len} questions")]
    Inconsistent { position: usize, len: usize },
}

#[must_use]
pub fn encode(progress: &Progress) -> Vec<u8> {
    // A string-keyed map of strings always serializes.
    serde_json::to_vec(progress).unwrap_or_default()
}

/// Decode a snapshot and check it could belong to `flow`.
///
/// # Errors
///
/// Fails on invalid UTF-8, JSON that does not describe a progress record,
/// or a record that `flow` could never have produced.
pub fn decode(bytes: &[u8], flow: &Flow) -> Result<Progress, SnapshotError> {
    let text = std::str::from_utf8(bytes)?;
    let progress: Progress = serde_json::from_str(text)?;
    if !progress.is_consistent_with(flow) {
        return Err(SnapshotError::Inconsistent {
            position: progress.position,
            len: flow.len(),
        });
    }
    Ok(progress)
}
