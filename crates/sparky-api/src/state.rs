//! Shared application state.

use std::sync::Arc;

use sparky_core::chat::service::ChatService;
use sparky_core::chat::store::SessionStore;
use sparky_core::llm::generator::ContentGenerator;
use sparky_core::summary::service::SummaryService;
use sparky_core::transcript::fetcher::TranscriptFetcher;
use sparky_infra::config::ServiceConfig;
use sparky_infra::llm::gemini::GeminiGenerator;
use sparky_infra::session::InMemorySessionStore;
use sparky_infra::transcript::YtTranscriptFetcher;

/// Application state shared across all HTTP handlers.
///
/// Generic over the three ports so tests can inject fakes; the binary wires
/// the real adapters through [`LiveState::init`].
pub struct AppState<S, T, G>
where
    S: SessionStore,
    T: TranscriptFetcher,
    G: ContentGenerator,
{
    pub chat_service: Arc<ChatService<S, T, G>>,
    pub summary_service: Arc<SummaryService<T, G>>,
}

impl<S, T, G> AppState<S, T, G>
where
    S: SessionStore,
    T: TranscriptFetcher,
    G: ContentGenerator,
{
    pub fn new(chat_service: ChatService<S, T, G>, summary_service: SummaryService<T, G>) -> Self {
        Self {
            chat_service: Arc::new(chat_service),
            summary_service: Arc::new(summary_service),
        }
    }
}

// Manual impl: deriving Clone would demand S, T, and G be Clone themselves,
// and only the Arcs are cloned here.
impl<S, T, G> Clone for AppState<S, T, G>
where
    S: SessionStore,
    T: TranscriptFetcher,
    G: ContentGenerator,
{
    fn clone(&self) -> Self {
        Self {
            chat_service: Arc::clone(&self.chat_service),
            summary_service: Arc::clone(&self.summary_service),
        }
    }
}

/// State wired with the production adapters.
pub type LiveState = AppState<InMemorySessionStore, YtTranscriptFetcher, GeminiGenerator>;

impl AppState<InMemorySessionStore, YtTranscriptFetcher, GeminiGenerator> {
    /// Wire the real adapters from configuration.
    pub fn init(config: &ServiceConfig) -> Self {
        Self::new(
            ChatService::new(
                InMemorySessionStore::new(),
                YtTranscriptFetcher::new(),
                GeminiGenerator::new(config),
            ),
            SummaryService::new(YtTranscriptFetcher::new(), GeminiGenerator::new(config)),
        )
    }
}
