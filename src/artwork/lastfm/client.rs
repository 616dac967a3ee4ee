//! Last.fm HTTP client
//!
//! Looks up album art with `album.getinfo`. Requires an API key.
//! See: https://www.last.fm/api/show/album.getInfo

use async_trait::async_trait;

use super::dto;
use crate::artwork::query::ArtworkQuery;
use crate::artwork::{ArtworkError, ArtworkProvider};
use crate::http::status_message;

/// Index of the "mega" image in `album.image`.
const MEGA_IMAGE: usize = 4;

/// Last.fm API client
pub struct LastFmClient {
    api_key: String,
    http_client: reqwest::Client,
    base_url: String,
}

impl LastFmClient {
    /// Create a new client with the given API key
    pub fn new(http_client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            http_client,
            base_url: "https://ws.audioscrobbler.com/2.0/".to_string(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Look up the largest album image for an artist/release pair.
    pub async fn album_image(&self, artist: &str, album: &str) -> Result<String, ArtworkError> {
        let response = self.send_album_info_request(artist, album).await?;

        if let Some(code) = response.error {
            return Err(ArtworkError::Api(format!(
                "Last.fm error {}: {}",
                code,
                response.message.unwrap_or_default()
            )));
        }

        let url = response
            .album
            .and_then(|album| album.image.into_iter().nth(MEGA_IMAGE))
            .map(|image| image.text)
            .unwrap_or_default();

        if url.is_empty() {
            return Err(ArtworkError::NoMatch);
        }
        Ok(url)
    }

    async fn send_album_info_request(
        &self,
        artist: &str,
        album: &str,
    ) -> Result<dto::AlbumInfoResponse, ArtworkError> {
        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[
                ("method", "album.getinfo"),
                ("api_key", self.api_key.as_str()),
                ("artist", artist),
                ("album", album),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|e| ArtworkError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ArtworkError::Http(status_message(status)));
        }

        response
            .json::<dto::AlbumInfoResponse>()
            .await
            .map_err(|e| ArtworkError::Parse(e.to_string()))
    }
}

#[async_trait]
impl ArtworkProvider for LastFmClient {
    fn name(&self) -> &'static str {
        "lastfm"
    }

    async fn find_image(&self, query: &ArtworkQuery) -> Result<String, ArtworkError> {
        self.album_image(&query.artist, &query.release).await
    }
}
