//! Generation backends.

pub mod gemini;

pub use gemini::GeminiGenerator;
