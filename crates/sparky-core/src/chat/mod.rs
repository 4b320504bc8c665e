//! Chat sessions for Sparky.
//!
//! The [`store::SessionStore`] trait abstracts turn storage, `context`
//! renders stored turns into the running prompt window, and
//! [`service::ChatService`] orchestrates a full conversation turn.

pub mod context;
pub mod service;
pub mod store;

pub use service::ChatService;
pub use store::SessionStore;
