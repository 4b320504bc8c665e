//! Sparky application layer: HTTP API and CLI.
//!
//! The binary in `main.rs` wires [`state::LiveState`] and serves the router
//! from [`http::router`]; everything is exported here so integration tests
//! can drive the same router with fake adapters.

pub mod cli;
pub mod http;
pub mod state;
