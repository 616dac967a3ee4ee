//! iTunes Search API Data Transfer Objects
//!
//! API Reference: https://performance-partners.apple.com/search-api

use serde::{Deserialize, Serialize};

/// Top-level search response
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResponse {
    pub result_count: u32,
    pub results: Vec<SearchResult>,
}

/// A single album/track hit
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResult {
    pub artist_name: Option<String>,
    pub collection_name: Option<String>,
    /// 100px artwork URL; larger sizes are derived from it
    pub artwork_url100: Option<String>,
}
