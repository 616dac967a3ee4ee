//! Discogs HTTP client
//!
//! Database search for releases and artists. Requires a consumer key/secret
//! and a User-Agent (set on the shared HTTP client).
//! See: https://www.discogs.com/developers

use super::dto;
use crate::artwork::ArtworkError;
use crate::artwork::query::is_gif;
use crate::http::status_message;

/// Discogs consumer credentials
#[derive(Debug, Clone)]
pub struct DiscogsCredentials {
    pub key: String,
    pub secret: String,
}

/// Discogs API client
pub struct DiscogsClient {
    credentials: DiscogsCredentials,
    http_client: reqwest::Client,
    base_url: String,
}

impl DiscogsClient {
    pub fn new(http_client: reqwest::Client, credentials: DiscogsCredentials) -> Self {
        Self {
            credentials,
            http_client,
            base_url: "https://api.discogs.com/database/search".to_string(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            credentials: DiscogsCredentials {
                key: "test-key".to_string(),
                secret: "test-secret".to_string(),
            },
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Cover of the first release hit that isn't a GIF placeholder.
    pub async fn release_cover(&self, artist: &str, release: &str) -> Result<String, ArtworkError> {
        let search = self
            .search(&[
                ("artist", artist),
                ("release_title", release),
                ("type", "release"),
            ])
            .await?;

        let url = search
            .results
            .into_iter()
            .filter_map(|r| r.cover_image)
            .find(|url| !is_gif(url))
            .ok_or(ArtworkError::NoMatch)?;

        if url.is_empty() {
            return Err(ArtworkError::NoMatch);
        }
        Ok(url)
    }

    /// Image of the first artist hit.
    pub async fn artist_image(&self, artist: &str) -> Result<String, ArtworkError> {
        let search = self.search(&[("q", artist), ("type", "artist")]).await?;

        let url = search
            .results
            .into_iter()
            .next()
            .and_then(|r| r.cover_image)
            .ok_or(ArtworkError::NoMatch)?;

        if is_gif(&url) {
            return Err(ArtworkError::Rejected(url));
        }
        if url.is_empty() {
            return Err(ArtworkError::NoMatch);
        }
        Ok(url)
    }

    async fn search(&self, params: &[(&str, &str)]) -> Result<dto::SearchResponse, ArtworkError> {
        let response = self
            .http_client
            .get(&self.base_url)
            .query(params)
            .query(&[
                ("key", self.credentials.key.as_str()),
                ("secret", self.credentials.secret.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ArtworkError::Network(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ArtworkError::RateLimited);
        }
        if !status.is_success() {
            return Err(ArtworkError::Http(status_message(status)));
        }

        response
            .json::<dto::SearchResponse>()
            .await
            .map_err(|e| ArtworkError::Parse(e.to_string()))
    }
}
