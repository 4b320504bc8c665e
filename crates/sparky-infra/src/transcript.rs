//! YouTube caption fetching.

use yt_transcript_rs::YouTubeTranscriptApi;

use sparky_core::transcript::extract_video_id;
use sparky_core::transcript::fetcher::TranscriptFetcher;
use sparky_types::transcript::TranscriptError;

/// Caption fetcher backed by YouTube's public transcript endpoints.
///
/// The API client carries per-request state, so a fresh one is built per
/// call rather than held across requests.
pub struct YtTranscriptFetcher;

impl YtTranscriptFetcher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for YtTranscriptFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptFetcher for YtTranscriptFetcher {
    async fn fetch(&self, url: &str) -> Result<String, TranscriptError> {
        let video_id = extract_video_id(url).ok_or(TranscriptError::InvalidUrl)?;

        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|e| TranscriptError::Service(e.to_string()))?;
        let fetched = api
            .fetch_transcript(video_id.as_str(), &["en"], false)
            .await
            .map_err(|e| TranscriptError::Unavailable(e.to_string()))?;

        let parts = fetched.parts();
        tracing::debug!(video_id = %video_id, fragments = parts.len(), "Fetched transcript");
        let text = parts
            .iter()
            .map(|part| part.text.clone())
            .collect::<Vec<_>>()
            .join(" ");
        Ok(text)
    }
}
