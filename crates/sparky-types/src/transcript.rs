//! Video identifier and transcript error types for Sparky.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use std::fmt;

/// Canonical YouTube video identifier extracted from a watch URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(pub String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for VideoId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for VideoId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Errors from transcript retrieval.
///
/// Replaces string-prefixed error sentinels with an explicit result type at
/// the fetcher boundary: callers decide per call site whether a failure is
/// fatal or merely skips transcript enrichment.
#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("could not extract a video id from the url")]
    InvalidUrl,

    #[error("transcript unavailable: {0}")]
    Unavailable(String),

    #[error("transcript service error: {0}")]
    Service(String),
}
