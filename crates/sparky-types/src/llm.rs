//! Generation provider error types for Sparky.
//!
//! The service issues single non-streaming completion calls, so the error
//! vocabulary covers the failures an OpenAI-compatible endpoint can return
//! for that path.

/// Errors from generation provider operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("provider returned an empty completion")]
    EmptyCompletion,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_error_display() {
        let err = LlmError::Provider {
            message: "quota exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "provider error: quota exceeded");
    }

    #[test]
    fn test_llm_error_auth_display() {
        assert_eq!(
            LlmError::AuthenticationFailed.to_string(),
            "authentication failed"
        );
    }
}
