//! Content generator port.

use sparky_types::llm::LlmError;

/// Trait for text generation backends.
///
/// One non-streaming completion per call: the persona prompt and the input
/// text travel together as a single request. Implementations live in
/// sparky-infra (e.g., `GeminiGenerator`). Uses native async fn in traits
/// (RPITIT, Rust 2024 edition).
pub trait ContentGenerator: Send + Sync {
    /// Generate text for the given persona prompt and input.
    fn generate(
        &self,
        prompt: &str,
        input: &str,
    ) -> impl std::future::Future<Output = Result<String, LlmError>> + Send;
}
