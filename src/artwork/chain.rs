//! Artwork resolution chain - tries providers in priority order.
//!
//! The chain is just an ordered list of providers. The first one that returns
//! a URL wins; every failure (network, HTTP status, bad payload, no match) only
//! moves on to the next provider. Nothing escapes the chain as an error.
//!
//! Entries in a playlist are resolved one after another, so at most one
//! request is in flight per pass.

use std::sync::Arc;

use super::discogs::{DiscogsArtistSearch, DiscogsClient, DiscogsCredentials, DiscogsReleaseSearch};
use super::itunes::ItunesClient;
use super::lastfm::LastFmClient;
use super::query::ArtworkQuery;
use super::{ArtworkError, ArtworkProvider};
use crate::config::Credentials;
use crate::playlist::model::PlaylistEntry;

/// A resolved image and the provider that found it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtwork {
    pub provider: &'static str,
    pub url: String,
}

/// Ordered list of artwork providers.
#[derive(Clone, Default)]
pub struct ArtworkChain {
    providers: Vec<Arc<dyn ArtworkProvider>>,
}

impl ArtworkChain {
    /// Create a chain that tries `providers` in the given order.
    pub fn new(providers: Vec<Arc<dyn ArtworkProvider>>) -> Self {
        Self { providers }
    }

    /// The station's standard order: Last.fm, iTunes, Discogs release, Discogs artist.
    ///
    /// Providers that need credentials are left out when those are missing.
    pub fn standard(http_client: reqwest::Client, credentials: &Credentials) -> Self {
        let mut providers: Vec<Arc<dyn ArtworkProvider>> = Vec::with_capacity(4);

        match &credentials.lastfm_api_key {
            Some(key) if !key.is_empty() => {
                providers.push(Arc::new(LastFmClient::new(http_client.clone(), key.clone())));
            }
            _ => tracing::warn!(target: "artwork", "No Last.fm API key configured, skipping Last.fm"),
        }

        providers.push(Arc::new(ItunesClient::new(http_client.clone())));

        match (&credentials.discogs_key, &credentials.discogs_secret) {
            (Some(key), Some(secret)) if !key.is_empty() && !secret.is_empty() => {
                let discogs = Arc::new(DiscogsClient::new(
                    http_client,
                    DiscogsCredentials {
                        key: key.clone(),
                        secret: secret.clone(),
                    },
                ));
                providers.push(Arc::new(DiscogsReleaseSearch(Arc::clone(&discogs))));
                providers.push(Arc::new(DiscogsArtistSearch(discogs)));
            }
            _ => tracing::warn!(target: "artwork", "No Discogs credentials configured, skipping Discogs"),
        }

        Self::new(providers)
    }

    /// Names of the providers, in the order they are tried.
    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Run the query through each provider until one finds an image.
    pub async fn resolve_query(&self, query: &ArtworkQuery) -> Option<ResolvedArtwork> {
        for provider in &self.providers {
            match provider.find_image(query).await {
                Ok(url) if !url.is_empty() => {
                    return Some(ResolvedArtwork {
                        provider: provider.name(),
                        url,
                    });
                }
                Ok(_) | Err(ArtworkError::NoMatch) => {
                    tracing::debug!(target: "artwork", "{}: no image for {:?}", provider.name(), query);
                }
                Err(e) => {
                    tracing::debug!(target: "artwork", "{} failed for {:?}: {}", provider.name(), query, e);
                }
            }
        }
        None
    }

    /// Resolve artwork for one entry and store it on the playcut.
    ///
    /// Non-playcut entries are skipped.
    pub async fn resolve_image(&self, entry: &mut PlaylistEntry) -> Option<String> {
        let playcut = entry.as_playcut_mut()?;
        let query = ArtworkQuery::from_playcut(playcut);

        match self.resolve_query(&query).await {
            Some(resolved) => {
                tracing::trace!(target: "artwork", "{} found artwork for {:?}", resolved.provider, query);
                playcut.image_url = Some(resolved.url.clone());
                Some(resolved.url)
            }
            None => {
                tracing::debug!(target: "artwork", "All providers missed for {:?}", query);
                None
            }
        }
    }

    /// Resolve artwork for every playcut, sequentially. Returns how many got an image.
    pub async fn resolve_playlist(&self, entries: &mut [PlaylistEntry]) -> usize {
        let mut resolved = 0;
        for entry in entries.iter_mut() {
            if self.resolve_image(entry).await.is_some() {
                resolved += 1;
            }
        }
        resolved
    }
}
