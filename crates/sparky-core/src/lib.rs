//! Business logic for Sparky.
//!
//! This crate defines the ports of the system (session store, transcript
//! fetcher, content generator) and the services that orchestrate them. It
//! depends only on `sparky-types` plus URL parsing -- never on
//! `sparky-infra`, the web layer, or any network client.

pub mod chat;
pub mod llm;
pub mod summary;
pub mod transcript;
