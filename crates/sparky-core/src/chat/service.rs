//! Chat orchestration.

use sparky_types::chat::{ChatReply, SessionId, Turn};
use sparky_types::error::ChatError;
use tracing::{debug, warn};

use crate::chat::context::{compose_input, render_context, video_context_block};
use crate::chat::store::SessionStore;
use crate::llm::generator::ContentGenerator;
use crate::llm::persona::Persona;
use crate::transcript::fetcher::TranscriptFetcher;

/// Runs one conversation turn against the guidance persona.
///
/// Coordinates the three ports: resolve the session, rebuild its context
/// window from stored turns, optionally enrich it with a video transcript,
/// generate the reply, and append the completed turn.
pub struct ChatService<S, T, G>
where
    S: SessionStore,
    T: TranscriptFetcher,
    G: ContentGenerator,
{
    store: S,
    transcripts: T,
    generator: G,
}

impl<S, T, G> ChatService<S, T, G>
where
    S: SessionStore,
    T: TranscriptFetcher,
    G: ContentGenerator,
{
    pub fn new(store: S, transcripts: T, generator: G) -> Self {
        Self {
            store,
            transcripts,
            generator,
        }
    }

    /// Generate a reply for `message` within a session.
    ///
    /// `context_url` optionally names a video whose transcript is appended
    /// to the context window. A failed transcript fetch is logged and
    /// skipped; the turn proceeds without video context. The turn is
    /// appended to the session only after generation succeeds, so a failed
    /// generation leaves the session unchanged.
    pub async fn converse(
        &self,
        message: &str,
        session_id: Option<SessionId>,
        context_url: Option<&str>,
    ) -> Result<ChatReply, ChatError> {
        let chat_id = self.store.get_or_create(session_id).await?;
        let turns = self.store.turns(&chat_id).await?;
        let mut context = render_context(&turns);

        if let Some(url) = context_url {
            match self.transcripts.fetch(url).await {
                Ok(transcript) => context.push_str(&video_context_block(&transcript)),
                Err(e) => {
                    warn!(chat_id = %chat_id, error = %e, "Skipping video context");
                }
            }
        }

        let input = compose_input(&context, message);
        let response = self
            .generator
            .generate(Persona::Guidance.prompt(), &input)
            .await?;

        self.store
            .append(
                &chat_id,
                Turn {
                    user: message.to_string(),
                    assistant: response.clone(),
                },
            )
            .await?;
        debug!(chat_id = %chat_id, prior_turns = turns.len(), "Chat turn completed");

        Ok(ChatReply { response, chat_id })
    }
}
