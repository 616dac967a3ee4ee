//! Discogs integration
//!
//! One client, two chain entries: a release-level search and an artist-level
//! fallback for when no release has a usable cover.

pub mod dto;
mod client;

use std::sync::Arc;

use async_trait::async_trait;

use crate::artwork::query::{ArtworkQuery, canonical_artist};
use crate::artwork::{ArtworkError, ArtworkProvider};

pub use client::{DiscogsClient, DiscogsCredentials};

/// Release-level cover search.
pub struct DiscogsReleaseSearch(pub Arc<DiscogsClient>);

/// Artist-level image search.
pub struct DiscogsArtistSearch(pub Arc<DiscogsClient>);

#[async_trait]
impl ArtworkProvider for DiscogsReleaseSearch {
    fn name(&self) -> &'static str {
        "discogs-release"
    }

    async fn find_image(&self, query: &ArtworkQuery) -> Result<String, ArtworkError> {
        self.0.release_cover(&query.artist, &query.release).await
    }
}

#[async_trait]
impl ArtworkProvider for DiscogsArtistSearch {
    fn name(&self) -> &'static str {
        "discogs-artist"
    }

    async fn find_image(&self, query: &ArtworkQuery) -> Result<String, ArtworkError> {
        self.0.artist_image(canonical_artist(&query.artist)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_artist_search_maps_various_artists() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("q", "Various Artists"))
            .and(query_param("type", "artist"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [{"type": "artist", "cover_image": "https://d/va.jpg"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = DiscogsArtistSearch(Arc::new(DiscogsClient::with_base_url(server.uri())));
        let url = provider
            .find_image(&ArtworkQuery::new("V/A", "Nuggets"))
            .await
            .unwrap();
        assert_eq!(url, "https://d/va.jpg");
    }

    #[tokio::test]
    async fn test_release_search_uses_expanded_self_titled() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("artist", "Television"))
            .and(query_param("release_title", "Television"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [{"type": "release", "cover_image": "https://d/tv.jpg"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = DiscogsReleaseSearch(Arc::new(DiscogsClient::with_base_url(server.uri())));
        let url = provider
            .find_image(&ArtworkQuery::new("Television", "s/t"))
            .await
            .unwrap();
        assert_eq!(url, "https://d/tv.jpg");
    }
}
