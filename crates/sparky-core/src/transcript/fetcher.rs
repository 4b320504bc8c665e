//! Transcript fetcher port.

use sparky_types::transcript::TranscriptError;

/// Trait for caption retrieval backends.
///
/// Takes the full watch URL rather than a raw id; implementations re-derive
/// the id so every caller gets identical URL handling. Implementations live
/// in sparky-infra (e.g., `YtTranscriptFetcher`). Uses native async fn in
/// traits (RPITIT, Rust 2024 edition).
pub trait TranscriptFetcher: Send + Sync {
    /// Fetch the full caption text for a video URL.
    ///
    /// Caption fragments are joined with single spaces in playback order.
    fn fetch(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Result<String, TranscriptError>> + Send;
}
