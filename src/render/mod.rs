//! Rendering adapter - maps held entries to display rows.
//!
//! Row identity is positional: row id == current index. Any update that shifts
//! rows must therefore be announced with `notify_all_changed`; an update that
//! only rewrites rows in place can use a range notification.

mod terminal;

use chrono::DateTime;
use chrono_tz::Tz;

use crate::playlist::{EntryKind, HeldPlaylist, PlaylistEntry};

pub use terminal::{TerminalSurface, format_row};

/// Station time zone used for breakpoint labels.
pub const DEFAULT_TIME_ZONE: Tz = chrono_tz::America::New_York;

/// Label shown for talk segments.
const TALKSET_LABEL: &str = "talkset";

/// Something that displays rows and must be told when they change.
///
/// Implementations are owned by a single task; never call them from elsewhere.
pub trait RenderSurface: Send {
    /// Rows `[start, start + count)` changed in place.
    fn notify_range_changed(&mut self, start: usize, count: usize);

    /// Row positions shifted or the whole list was replaced.
    fn notify_all_changed(&mut self);
}

/// Image shown on a song row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artwork {
    Url(String),
    /// Station placeholder until the chain resolves something
    Placeholder,
}

/// One display row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Song {
        title: String,
        artist: String,
        artwork: Artwork,
    },
    /// Talk segment or hour break
    Marker(String),
}

/// Row view over the held playlist.
#[derive(Debug, Clone)]
pub struct PlaylistRows {
    playlist: HeldPlaylist,
    time_zone: Tz,
}

impl PlaylistRows {
    pub fn new(playlist: HeldPlaylist, time_zone: Tz) -> Self {
        Self {
            playlist,
            time_zone,
        }
    }

    pub fn row_count(&self) -> usize {
        self.playlist.len()
    }

    /// Rows are identified by position.
    pub fn row_id(&self, position: usize) -> u64 {
        position as u64
    }

    pub fn row(&self, position: usize) -> Option<Row> {
        self.playlist
            .get(position)
            .map(|entry| to_row(&entry, self.time_zone))
    }

    /// All rows from one consistent snapshot.
    pub fn rows(&self) -> Vec<Row> {
        self.playlist
            .snapshot()
            .iter()
            .map(|entry| to_row(entry, self.time_zone))
            .collect()
    }
}

/// Map one entry to its row.
pub fn to_row(entry: &PlaylistEntry, time_zone: Tz) -> Row {
    match &entry.kind {
        EntryKind::Playcut(playcut) => Row::Song {
            title: playcut.song_title.clone(),
            artist: playcut.artist_name.clone(),
            artwork: match &playcut.image_url {
                Some(url) if !url.is_empty() => Artwork::Url(url.clone()),
                _ => Artwork::Placeholder,
            },
        },
        EntryKind::Talkset => Row::Marker(TALKSET_LABEL.to_string()),
        EntryKind::Breakpoint => Row::Marker(
            entry
                .hour
                .map(|hour| hour_label(hour, time_zone))
                .unwrap_or_default(),
        ),
    }
}

/// Format an epoch-millis timestamp as a 12-hour hour of day, e.g. "3 PM".
pub fn hour_label(hour_millis: i64, time_zone: Tz) -> String {
    match DateTime::from_timestamp_millis(hour_millis) {
        Some(utc) => utc.with_timezone(&time_zone).format("%-I %p").to_string(),
        None => String::new(),
    }
}
