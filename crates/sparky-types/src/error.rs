use thiserror::Error;

use crate::llm::LlmError;
use crate::transcript::TranscriptError;

/// Errors from session store backends (used by trait definitions in
/// sparky-core).
///
/// The in-memory store never fails, but the trait keeps a fallible contract
/// so a persistent backend can slot in without changing callers.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session store backend error: {0}")]
    Backend(String),
}

/// Failures while running a chat turn.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Generation(#[from] LlmError),
}

/// Failures while summarizing a video.
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error(transparent)]
    Transcript(#[from] TranscriptError),

    #[error(transparent)]
    Generation(#[from] LlmError),
}
