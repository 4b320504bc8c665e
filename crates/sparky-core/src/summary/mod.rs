//! Video summarization for Sparky.

pub mod service;

pub use service::SummaryService;
