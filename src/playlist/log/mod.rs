//! On-air log integration
//!
//! The station publishes its log as a JSON array of recent entries. This module
//! holds the raw DTOs, the adapter into domain entries, and the HTTP client.

pub mod dto;
mod adapter;
mod client;

use async_trait::async_trait;

use crate::playlist::model::PlaylistEntry;

pub use adapter::to_entries;
pub use client::{DEFAULT_LOG_URL, PlaylistLogClient};

/// Errors from the playlist log.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LogError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Log request failed: {0}")]
    Http(String),

    #[error("Failed to parse log response: {0}")]
    Parse(String),
}

/// Source of recent log entries, newest first.
///
/// Implement this trait to substitute the log in tests.
#[async_trait]
pub trait PlaylistSource: Send + Sync {
    /// Fetch the `count` most recent entries.
    async fn fetch_recent(&self, count: usize) -> Result<Vec<PlaylistEntry>, LogError>;
}
