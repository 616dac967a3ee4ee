//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`, while
//! CLI/main uses `anyhow` for convenient error propagation.
//!
//! # Design
//!
//! - [`Error`]: Top-level error for building the shared command context
//! - Module-specific errors ([`LogError`], [`ConfigError`]) for detailed
//!   handling; artwork and playback failures are logged where they happen
//!   and never reach this level
//!
//! # Example
//!
//! ```ignore
//! use crate::error::ResultExt;
//!
//! let entries = client.recent_entries(1).await.with_context("loading playlist")?;
//! ```

use crate::config::ConfigError;
use crate::playlist::LogError;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Playlist log error
    #[error("Playlist log error: {0}")]
    Log(#[from] LogError),

    /// Config file error
    #[error(transparent)]
    ConfigFile(#[from] ConfigError),

    /// HTTP client setup error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for std::result::Result<T, LogError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Log(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, ConfigError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::ConfigFile(e).context(ctx))
    }
}
