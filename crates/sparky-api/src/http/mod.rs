//! HTTP surface of Sparky.

pub mod error;
pub mod handlers;
pub mod router;
