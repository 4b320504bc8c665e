//! Axum router configuration with middleware.
//!
//! Routes sit at the root (no version prefix). Middleware: CORS open to any
//! origin so browser frontends on other origins can call in, request tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use sparky_core::chat::store::SessionStore;
use sparky_core::llm::generator::ContentGenerator;
use sparky_core::transcript::fetcher::TranscriptFetcher;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router<S, T, G>(state: AppState<S, T, G>) -> Router
where
    S: SessionStore + 'static,
    T: TranscriptFetcher + 'static,
    G: ContentGenerator + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/process-youtube",
            post(handlers::video::process_youtube::<S, T, G>),
        )
        .route("/chat", post(handlers::chat::chat::<S, T, G>))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
