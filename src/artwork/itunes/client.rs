//! iTunes Search HTTP client
//!
//! Free-text album search. No API key required.

use async_trait::async_trait;

use super::dto;
use crate::artwork::query::{ArtworkQuery, itunes_high_res};
use crate::artwork::{ArtworkError, ArtworkProvider};
use crate::http::status_message;

/// iTunes Search API client
pub struct ItunesClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ItunesClient {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self {
            http_client,
            base_url: "https://itunes.apple.com/search".to_string(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Search for `term` and return the first hit's artwork at 1200px.
    pub async fn search_artwork(&self, term: &str) -> Result<String, ArtworkError> {
        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[("term", term), ("media", "music"), ("entity", "album")])
            .send()
            .await
            .map_err(|e| ArtworkError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ArtworkError::Http(status_message(status)));
        }

        // iTunes answers with text/javascript, so parse the body ourselves
        let body = response
            .text()
            .await
            .map_err(|e| ArtworkError::Network(e.to_string()))?;
        let search: dto::SearchResponse =
            serde_json::from_str(&body).map_err(|e| ArtworkError::Parse(e.to_string()))?;

        match search
            .results
            .into_iter()
            .next()
            .and_then(|r| r.artwork_url100)
        {
            Some(url) if !url.is_empty() => Ok(itunes_high_res(&url)),
            _ => Err(ArtworkError::NoMatch),
        }
    }
}

#[async_trait]
impl ArtworkProvider for ItunesClient {
    fn name(&self) -> &'static str {
        "itunes"
    }

    async fn find_image(&self, query: &ArtworkQuery) -> Result<String, ArtworkError> {
        self.search_artwork(&query.search_term()).await
    }
}
