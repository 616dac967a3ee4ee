//! Playlist log HTTP client
//!
//! Fetches the most recent entries from the station's on-air log.
//! The endpoint returns a JSON array, newest entry first.

use async_trait::async_trait;

use super::{LogError, PlaylistSource, adapter, dto};
use crate::http::status_message;
use crate::playlist::model::PlaylistEntry;

/// Default location of the station's log.
pub const DEFAULT_LOG_URL: &str = "https://wxyc.info/playlists/recentEntries";

/// HTTP client for the on-air log
pub struct PlaylistLogClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl PlaylistLogClient {
    /// Create a client against the given log URL.
    pub fn new(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Fetch the `count` most recent entries.
    pub async fn recent_entries(&self, count: usize) -> Result<Vec<PlaylistEntry>, LogError> {
        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[("v", "2".to_string()), ("n", count.to_string())])
            .send()
            .await
            .map_err(|e| LogError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LogError::Http(status_message(status)));
        }

        let raw = response
            .json::<Vec<dto::Entry>>()
            .await
            .map_err(|e| LogError::Parse(e.to_string()))?;

        Ok(adapter::to_entries(raw))
    }
}

#[async_trait]
impl PlaylistSource for PlaylistLogClient {
    async fn fetch_recent(&self, count: usize) -> Result<Vec<PlaylistEntry>, LogError> {
        self.recent_entries(count).await
    }
}
