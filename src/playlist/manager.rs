//! Full and windowed fetches with artwork attached.
//!
//! Wraps a [`PlaylistSource`] so callers never see a log error: a failed fetch
//! is logged and comes back as an empty list.

use std::sync::Arc;

use super::log::PlaylistSource;
use super::model::PlaylistEntry;
use crate::artwork::ArtworkChain;

/// Fetch sizes for the two kinds of request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchSizes {
    /// Entries pulled on cold start / full resync
    pub full: usize,
    /// Entries pulled per poll; must be at least the comparison window
    pub window: usize,
}

impl Default for FetchSizes {
    fn default() -> Self {
        Self {
            full: 50,
            window: 7,
        }
    }
}

/// Playlist fetches used by the reconciler.
#[derive(Clone)]
pub struct PlaylistManager {
    source: Arc<dyn PlaylistSource>,
    artwork: ArtworkChain,
    sizes: FetchSizes,
}

impl PlaylistManager {
    pub fn new(source: Arc<dyn PlaylistSource>, artwork: ArtworkChain, sizes: FetchSizes) -> Self {
        Self {
            source,
            artwork,
            sizes,
        }
    }

    pub fn sizes(&self) -> FetchSizes {
        self.sizes
    }

    /// Full playlist with artwork resolved. Empty on failure.
    pub async fn fetch_full(&self) -> Vec<PlaylistEntry> {
        let mut entries = self.fetch(self.sizes.full).await;
        if !entries.is_empty() {
            let resolved = self.artwork.resolve_playlist(&mut entries).await;
            tracing::info!(
                target: "playlist",
                "Fetched full playlist: {} entries, {} with artwork",
                entries.len(),
                resolved
            );
        }
        entries
    }

    /// Most recent window, no artwork. Empty on failure.
    pub async fn fetch_window(&self) -> Vec<PlaylistEntry> {
        self.fetch(self.sizes.window).await
    }

    /// Most recent window with artwork resolved. Empty on failure.
    pub async fn fetch_window_with_artwork(&self) -> Vec<PlaylistEntry> {
        let mut entries = self.fetch_window().await;
        self.artwork.resolve_playlist(&mut entries).await;
        entries
    }

    async fn fetch(&self, count: usize) -> Vec<PlaylistEntry> {
        match self.source.fetch_recent(count).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(target: "playlist", "Playlist fetch of {} entries failed: {}", count, e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artwork::ArtworkProvider;
    use crate::artwork::traits::mocks::MockProvider;
    use crate::test_utils::{MockSource, ids};

    fn manager(source: Arc<MockSource>, provider: Arc<MockProvider>) -> PlaylistManager {
        PlaylistManager::new(
            source,
            ArtworkChain::new(vec![provider as Arc<dyn ArtworkProvider>]),
            FetchSizes { full: 10, window: 6 },
        )
    }

    #[tokio::test]
    async fn test_window_fetch_has_no_artwork() {
        let source = Arc::new(MockSource::with_ids(&[8, 7, 6, 5, 4, 3, 2, 1]));
        let provider = Arc::new(MockProvider::found("p", "http://img"));
        let manager = manager(source.clone(), provider.clone());

        let window = manager.fetch_window().await;
        assert_eq!(ids(&window), vec![8, 7, 6, 5, 4, 3]);
        assert_eq!(provider.calls(), 0);
        assert_eq!(source.requested(), vec![6]);
    }

    #[tokio::test]
    async fn test_window_with_artwork() {
        let source = Arc::new(MockSource::with_ids(&[3, 2, 1]));
        let provider = Arc::new(MockProvider::found("p", "http://img"));
        let manager = manager(source, provider.clone());

        let window = manager.fetch_window_with_artwork().await;
        assert!(window
            .iter()
            .all(|e| e.as_playcut().unwrap().image_url.as_deref() == Some("http://img")));
        assert_eq!(provider.calls(), 3);
    }

    #[tokio::test]
    async fn test_failure_is_empty() {
        let source = Arc::new(MockSource::failing());
        let provider = Arc::new(MockProvider::found("p", "http://img"));
        let manager = manager(source.clone(), provider.clone());

        assert!(manager.fetch_full().await.is_empty());
        assert!(manager.fetch_window_with_artwork().await.is_empty());
        assert_eq!(provider.calls(), 0);
        assert_eq!(source.requested(), vec![10, 6]);
    }
}
