//! Discogs database search Data Transfer Objects
//!
//! Release and artist searches share the same result shape.
//!
//! API Reference: https://www.discogs.com/developers#page:database,header:database-search

use serde::{Deserialize, Serialize};

/// Top-level search response
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

/// A search hit (release, master or artist)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchResult {
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: Option<String>,
    pub thumb: Option<String>,
    pub cover_image: Option<String>,
}
