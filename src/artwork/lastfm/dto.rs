//! Last.fm API Data Transfer Objects
//!
//! Shape of the `album.getinfo` response (JSON format). Only the fields we
//! read are modelled; serde ignores the rest.
//!
//! API Reference: https://www.last.fm/api/show/album.getInfo

use serde::{Deserialize, Serialize};

/// Top-level `album.getinfo` response.
///
/// Last.fm reports lookup errors with HTTP 200 and an `error` body, so both
/// halves are optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AlbumInfoResponse {
    pub album: Option<Album>,
    /// Last.fm error code (6 = album not found)
    pub error: Option<i64>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Album {
    pub name: Option<String>,
    pub artist: Option<String>,
    /// Images ordered small, medium, large, extralarge, mega
    pub image: Vec<Image>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Image {
    #[serde(rename = "#text", default)]
    pub text: String,
    #[serde(default)]
    pub size: Option<String>,
}
