//! Playlist log API Data Transfer Objects
//!
//! These structs match the EXACT JSON shape returned by the station's
//! `recentEntries` endpoint. They are deserialized directly from the response.
//!
//! DO NOT use these types in business logic - use the domain types instead.
//! The adapter converts these DTOs into `PlaylistEntry`.

use serde::{Deserialize, Serialize};

/// One entry in the `recentEntries` array.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: i64,
    /// "playcut", "breakpoint" or "talkset"
    pub entry_type: String,
    /// Epoch millis, present on breakpoints and talksets
    #[serde(default)]
    pub hour: Option<i64>,
    /// Present only for playcuts
    #[serde(default)]
    pub playcut: Option<Playcut>,
}

/// Song details for a playcut entry.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Playcut {
    pub song_title: Option<String>,
    pub artist_name: Option<String>,
    pub release_title: Option<String>,
    pub label_name: Option<String>,
}
