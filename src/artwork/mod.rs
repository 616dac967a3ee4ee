//! Artwork resolution - finds a cover image for each playcut.
//!
//! # Architecture
//!
//! Same layering for every service:
//! - **DTOs** (`*/dto.rs`) - Exact API response shapes
//! - **Clients** (`*/client.rs`) - HTTP calls, status handling, field picking
//! - **Provider trait** (`traits.rs`) - Uniform `find_image` signature
//! - **Chain** (`chain.rs`) - Ordered list of providers, first hit wins
//!
//! Priority order: Last.fm album info, iTunes search, Discogs release search,
//! Discogs artist search.
//!
//! # Usage
//!
//! ```ignore
//! let chain = ArtworkChain::standard(http_client, &config.credentials);
//! chain.resolve_playlist(&mut entries).await;
//! ```

pub mod chain;
pub mod discogs;
pub mod itunes;
pub mod lastfm;
pub mod query;
pub mod traits;

pub use chain::{ArtworkChain, ResolvedArtwork};
pub use query::ArtworkQuery;
pub use traits::ArtworkProvider;

/// Errors from a single artwork provider.
///
/// The chain treats all of these as "no result from this provider".
#[derive(Debug, Clone, thiserror::Error)]
pub enum ArtworkError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed: {0}")]
    Http(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Rate limited - try again later")]
    RateLimited,

    #[error("Image rejected: {0}")]
    Rejected(String),

    #[error("No artwork found")]
    NoMatch,
}
