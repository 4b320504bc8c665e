//! Environment configuration for Sparky.
//!
//! All service settings come from the process environment (the binary loads
//! a local `.env` file first). Only the API key is mandatory; endpoint and
//! model fall back to Gemini defaults.

use secrecy::SecretString;

/// OpenAI-compatible endpoint of the Gemini API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

/// Generation model used when `GEMINI_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Environment variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// Resolved service configuration.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    /// Gemini API key. Wrapped in [`SecretString`] so it never Debug-prints.
    pub api_key: SecretString,
    /// Base URL of the OpenAI-compatible API.
    pub base_url: String,
    /// Model name sent with every generation request.
    pub model: String,
}

/// Configuration loading failure.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

impl ServiceConfig {
    /// Load configuration from the process environment.
    ///
    /// `GOOGLE_API_KEY` must be set and non-empty. `GEMINI_BASE_URL` and
    /// `GEMINI_MODEL` override the defaults when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key =
            optional_var(API_KEY_VAR).ok_or(ConfigError::MissingVar(API_KEY_VAR))?;
        Ok(Self {
            api_key: SecretString::from(api_key),
            base_url: optional_var("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: optional_var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }
}

/// Read an env var, treating empty values as absent.
fn optional_var(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if value.is_empty() => None,
        Ok(value) => Some(value),
        Err(std::env::VarError::NotPresent) => None,
        Err(std::env::VarError::NotUnicode(_)) => {
            // Env var exists but has invalid Unicode -- treat as not found
            // rather than erroring, since the values must be valid strings
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    // Env mutation is process-global, so every step lives in one test body
    // that restores the environment before returning.
    #[test]
    fn from_env_roundtrip() {
        // SAFETY: this test is the only one touching these vars and it
        // cleans up before returning.
        unsafe {
            std::env::remove_var(API_KEY_VAR);
            std::env::remove_var("GEMINI_BASE_URL");
            std::env::remove_var("GEMINI_MODEL");
        }

        let err = ServiceConfig::from_env().unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing required environment variable GOOGLE_API_KEY"
        );

        // SAFETY: same test, cleaned up below.
        unsafe { std::env::set_var(API_KEY_VAR, "") };
        assert!(ServiceConfig::from_env().is_err());

        // SAFETY: same test, cleaned up below.
        unsafe { std::env::set_var(API_KEY_VAR, "test-key-123") };
        let config = ServiceConfig::from_env().unwrap();
        assert_eq!(config.api_key.expose_secret(), "test-key-123");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);

        // SAFETY: same test, cleaned up below.
        unsafe {
            std::env::set_var("GEMINI_BASE_URL", "http://localhost:9090/v1");
            std::env::set_var("GEMINI_MODEL", "gemini-2.5-flash");
        }
        let config = ServiceConfig::from_env().unwrap();
        assert_eq!(config.base_url, "http://localhost:9090/v1");
        assert_eq!(config.model, "gemini-2.5-flash");

        // SAFETY: the vars were set by this test alone.
        unsafe {
            std::env::remove_var(API_KEY_VAR);
            std::env::remove_var("GEMINI_BASE_URL");
            std::env::remove_var("GEMINI_MODEL");
        }
    }
}
