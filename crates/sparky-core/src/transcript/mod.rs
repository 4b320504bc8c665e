//! Transcript retrieval for Sparky.
//!
//! `extract_video_id` derives a canonical video id from a watch URL; the
//! [`fetcher::TranscriptFetcher`] trait is the port a caption backend
//! implements.

pub mod fetcher;
pub mod video_id;

pub use fetcher::TranscriptFetcher;
pub use video_id::extract_video_id;
