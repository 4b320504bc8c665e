//! Video summary HTTP handler.
//!
//! Endpoint:
//! - POST /process-youtube - Summarize a YouTube video's captions

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use serde_json::{Value, json};

use sparky_core::chat::store::SessionStore;
use sparky_core::llm::generator::ContentGenerator;
use sparky_core::transcript::extract_video_id;
use sparky_core::transcript::fetcher::TranscriptFetcher;

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for video processing.
#[derive(Debug, Deserialize)]
pub struct ProcessYoutubeRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// POST /process-youtube - Fetch captions and produce a lesson summary.
///
/// The URL is validated up front so an unrecognized link fails as
/// `Invalid YouTube URL` before any network work happens.
pub async fn process_youtube<S, T, G>(
    State(state): State<AppState<S, T, G>>,
    Json(body): Json<ProcessYoutubeRequest>,
) -> Result<Json<Value>, AppError>
where
    S: SessionStore,
    T: TranscriptFetcher,
    G: ContentGenerator,
{
    let url = body
        .url
        .as_deref()
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::Validation("No URL provided".to_string()))?;
    let video_id = extract_video_id(url)
        .ok_or_else(|| AppError::Validation("Invalid YouTube URL".to_string()))?;

    let summary = state.summary_service.summarize(url).await?;

    Ok(Json(json!({
        "status": "success",
        "summary": summary,
        "video_id": video_id,
    })))
}
