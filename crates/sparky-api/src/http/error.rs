//! Application error type mapping to HTTP status codes and body format.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use sparky_types::error::{ChatError, StoreError, SummaryError};
use sparky_types::llm::LlmError;
use sparky_types::transcript::TranscriptError;

/// Application-level error that maps to HTTP responses.
///
/// Every variant serializes as `{"error": "<message>"}`; only the status
/// code differs.
#[derive(Debug)]
pub enum AppError {
    /// Request validation failure.
    Validation(String),
    /// Transcript retrieval failure in the summary flow.
    Transcript(TranscriptError),
    /// Text generation failure.
    Generation(LlmError),
    /// Session store failure.
    Store(StoreError),
}

impl From<SummaryError> for AppError {
    fn from(e: SummaryError) -> Self {
        match e {
            SummaryError::Transcript(e) => AppError::Transcript(e),
            SummaryError::Generation(e) => AppError::Generation(e),
        }
    }
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        match e {
            ChatError::Store(e) => AppError::Store(e),
            ChatError::Generation(e) => AppError::Generation(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Transcript(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::Generation(e) => (StatusCode::BAD_GATEWAY, e.to_string()),
            AppError::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        if status.is_server_error() {
            tracing::error!(status = %status, error = %message, "Request failed");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let resp = AppError::Validation("No URL provided".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_transcript_maps_to_400() {
        let resp = AppError::Transcript(TranscriptError::InvalidUrl).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_generation_maps_to_502() {
        let resp = AppError::Generation(LlmError::AuthenticationFailed).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_store_maps_to_500() {
        let resp = AppError::Store(StoreError::Backend("lost".to_string())).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
