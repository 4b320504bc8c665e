//! Chat HTTP handler.
//!
//! Endpoint:
//! - POST /chat - One conversation turn with the guidance persona

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use serde_json::{Value, json};

use sparky_core::chat::store::SessionStore;
use sparky_core::llm::generator::ContentGenerator;
use sparky_core::transcript::fetcher::TranscriptFetcher;
use sparky_types::chat::SessionId;

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for a chat turn.
///
/// Empty strings count as absent for every field, so a client sending
/// `"chat_id": ""` gets a fresh session rather than one keyed by the empty
/// string.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub chat_id: Option<String>,
    /// Optional YouTube URL whose transcript enriches the reply.
    #[serde(default)]
    pub context: Option<String>,
}

/// POST /chat - Generate the assistant's reply for one message.
pub async fn chat<S, T, G>(
    State(state): State<AppState<S, T, G>>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<Value>, AppError>
where
    S: SessionStore,
    T: TranscriptFetcher,
    G: ContentGenerator,
{
    let message = body
        .message
        .as_deref()
        .filter(|m| !m.is_empty())
        .ok_or_else(|| AppError::Validation("No message provided".to_string()))?;
    let session_id = body
        .chat_id
        .filter(|id| !id.is_empty())
        .map(SessionId::from);
    let context_url = body.context.as_deref().filter(|c| !c.is_empty());

    let reply = state
        .chat_service
        .converse(message, session_id, context_url)
        .await?;

    Ok(Json(json!({
        "response": reply.response,
        "chat_id": reply.chat_id,
    })))
}
