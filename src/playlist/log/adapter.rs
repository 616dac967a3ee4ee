//! Adapter layer: Convert playlist log DTOs to domain models
//!
//! This is the ONLY place where log DTO types are converted to domain types.

use super::dto;
use crate::playlist::model::{EntryKind, Playcut, PlaylistEntry};

/// Convert a raw log response into domain entries, keeping the log's order.
///
/// Entries with an unknown type, or playcuts without song details, are dropped.
pub fn to_entries(raw: Vec<dto::Entry>) -> Vec<PlaylistEntry> {
    raw.into_iter().filter_map(to_entry).collect()
}

fn to_entry(raw: dto::Entry) -> Option<PlaylistEntry> {
    let kind = match raw.entry_type.as_str() {
        "playcut" => EntryKind::Playcut(to_playcut(raw.playcut?)),
        "breakpoint" => EntryKind::Breakpoint,
        "talkset" => EntryKind::Talkset,
        other => {
            tracing::debug!(target: "playlist", "Skipping entry {} with unknown type {:?}", raw.id, other);
            return None;
        }
    };

    Some(PlaylistEntry {
        id: raw.id,
        kind,
        hour: raw.hour,
    })
}

fn to_playcut(raw: dto::Playcut) -> Playcut {
    Playcut {
        song_title: raw.song_title.unwrap_or_default(),
        artist_name: raw.artist_name.unwrap_or_default(),
        release_title: raw.release_title.unwrap_or_default(),
        label_name: raw.label_name.unwrap_or_default(),
        image_url: None,
    }
}
