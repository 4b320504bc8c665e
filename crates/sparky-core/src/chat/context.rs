//! Prompt context rendering.
//!
//! Pure formatting helpers for the chat flow. The exact line shapes are part
//! of the service contract: prior turns render as alternating `User:` and
//! `Sparky:` lines, and the generation input always ends with an open
//! `Sparky:` line for the model to complete.

use sparky_types::chat::Turn;

/// Name the assistant answers under in rendered context.
pub const ASSISTANT_NAME: &str = "Sparky";

/// Render prior turns as alternating user/assistant lines.
///
/// An empty turn list renders as the empty string.
pub fn render_context(turns: &[Turn]) -> String {
    let mut out = String::new();
    for turn in turns {
        out.push_str(&format!(
            "User: {}\n{ASSISTANT_NAME}: {}\n",
            turn.user, turn.assistant
        ));
    }
    out
}

/// Render a fetched transcript as a video-context block.
pub fn video_context_block(transcript: &str) -> String {
    format!("\nVideo Context:\n{transcript}\n")
}

/// Compose the final generation input from the rendered context and the new
/// user message.
pub fn compose_input(context: &str, message: &str) -> String {
    format!("{context}User: {message}\n{ASSISTANT_NAME}:")
}
