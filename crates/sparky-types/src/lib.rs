//! Shared domain types for Sparky.
//!
//! This crate contains the core domain types used across the Sparky service:
//! sessions, turns, video identifiers, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, thiserror.

pub mod chat;
pub mod error;
pub mod llm;
pub mod transcript;
