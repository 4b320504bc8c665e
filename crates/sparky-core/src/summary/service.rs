//! Summary orchestration.

use sparky_types::error::SummaryError;
use tracing::debug;

use crate::llm::generator::ContentGenerator;
use crate::llm::persona::Persona;
use crate::transcript::fetcher::TranscriptFetcher;

/// Fetches a video transcript and condenses it with the summarizer persona.
pub struct SummaryService<T, G>
where
    T: TranscriptFetcher,
    G: ContentGenerator,
{
    transcripts: T,
    generator: G,
}

impl<T, G> SummaryService<T, G>
where
    T: TranscriptFetcher,
    G: ContentGenerator,
{
    pub fn new(transcripts: T, generator: G) -> Self {
        Self {
            transcripts,
            generator,
        }
    }

    /// Summarize the video behind `url`.
    ///
    /// Transcript failures propagate: a video without captions fails the
    /// whole request, unlike the chat flow's soft enrichment.
    pub async fn summarize(&self, url: &str) -> Result<String, SummaryError> {
        let transcript = self.transcripts.fetch(url).await?;
        debug!(transcript_chars = transcript.len(), "Transcript fetched");
        let summary = self
            .generator
            .generate(Persona::Summarizer.prompt(), &transcript)
            .await?;
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparky_types::llm::LlmError;
    use sparky_types::transcript::TranscriptError;
    use std::sync::{Arc, Mutex};

    struct FixedTranscript(&'static str);

    impl TranscriptFetcher for FixedTranscript {
        async fn fetch(&self, _url: &str) -> Result<String, TranscriptError> {
            Ok(self.0.to_string())
        }
    }

    struct NoTranscript;

    impl TranscriptFetcher for NoTranscript {
        async fn fetch(&self, _url: &str) -> Result<String, TranscriptError> {
            Err(TranscriptError::Unavailable("captions disabled".into()))
        }
    }

    #[derive(Clone, Default)]
    struct RecordingGenerator {
        calls: Arc<Mutex<Vec<(String, String)>>>,
    }

    impl ContentGenerator for RecordingGenerator {
        async fn generate(&self, prompt: &str, input: &str) -> Result<String, LlmError> {
            self.calls
                .lock()
                .unwrap()
                .push((prompt.to_string(), input.to_string()));
            Ok("a tidy lesson outline".to_string())
        }
    }

    struct BrokenGenerator;

    impl ContentGenerator for BrokenGenerator {
        async fn generate(&self, _prompt: &str, _input: &str) -> Result<String, LlmError> {
            Err(LlmError::RateLimited {
                retry_after_ms: None,
            })
        }
    }

    #[tokio::test]
    async fn test_summarize_feeds_transcript_to_summarizer() {
        let generator = RecordingGenerator::default();
        let service = SummaryService::new(FixedTranscript("swap the blown fuse"), generator.clone());

        let summary = service.summarize("https://youtu.be/abc").await.unwrap();

        assert_eq!(summary, "a tidy lesson outline");
        let calls = generator.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, Persona::Summarizer.prompt());
        assert_eq!(calls[0].1, "swap the blown fuse");
    }

    #[tokio::test]
    async fn test_transcript_failure_propagates() {
        let service = SummaryService::new(NoTranscript, RecordingGenerator::default());

        let err = service.summarize("https://youtu.be/abc").await;

        assert!(matches!(err, Err(SummaryError::Transcript(_))));
    }

    #[tokio::test]
    async fn test_generation_failure_propagates() {
        let service = SummaryService::new(FixedTranscript("some captions"), BrokenGenerator);

        let err = service.summarize("https://youtu.be/abc").await;

        assert!(matches!(err, Err(SummaryError::Generation(_))));
    }
}
