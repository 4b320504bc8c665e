//! Infrastructure adapters for Sparky.
//!
//! Concrete implementations of the sparky-core ports: a DashMap-backed
//! session store, a YouTube caption fetcher, and a Gemini generator speaking
//! the OpenAI-compatible endpoint. Environment configuration lives here too.

pub mod config;
pub mod llm;
pub mod session;
pub mod transcript;
