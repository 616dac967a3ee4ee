//! Internal domain models for the on-air log.
//!
//! These types are OUR types - they don't change when the log's JSON changes.
//! Responses from the playlist log get converted into these via `log::adapter`.

/// One row in the on-air log.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistEntry {
    /// Identity key used for diffing. Issued by the remote log, never reused.
    pub id: i64,
    /// What kind of row this is
    pub kind: EntryKind,
    /// Epoch-millis timestamp; only breakpoints and talksets carry one
    pub hour: Option<i64>,
}

/// Entry type as reported by the log.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryKind {
    /// A played song
    Playcut(Playcut),
    /// Hour boundary marker
    Breakpoint,
    /// Spoken-word segment marker
    Talkset,
}

/// A played song as reported by the log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Playcut {
    pub song_title: String,
    pub artist_name: String,
    pub release_title: String,
    pub label_name: String,
    /// Cover image, filled in by the artwork chain
    pub image_url: Option<String>,
}

impl PlaylistEntry {
    /// Create a playcut entry.
    pub fn playcut(id: i64, playcut: Playcut) -> Self {
        Self {
            id,
            kind: EntryKind::Playcut(playcut),
            hour: None,
        }
    }

    /// Create a breakpoint marker at the given epoch-millis hour.
    pub fn breakpoint(id: i64, hour: i64) -> Self {
        Self {
            id,
            kind: EntryKind::Breakpoint,
            hour: Some(hour),
        }
    }

    /// Create a talkset marker.
    pub fn talkset(id: i64, hour: i64) -> Self {
        Self {
            id,
            kind: EntryKind::Talkset,
            hour: Some(hour),
        }
    }

    /// The playcut carried by this entry, if it is one.
    pub fn as_playcut(&self) -> Option<&Playcut> {
        match &self.kind {
            EntryKind::Playcut(p) => Some(p),
            _ => None,
        }
    }

    /// Mutable access to the playcut, used by the artwork chain.
    pub fn as_playcut_mut(&mut self) -> Option<&mut Playcut> {
        match &mut self.kind {
            EntryKind::Playcut(p) => Some(p),
            _ => None,
        }
    }

    /// Wire name of the entry type.
    pub fn type_name(&self) -> &'static str {
        match self.kind {
            EntryKind::Playcut(_) => "playcut",
            EntryKind::Breakpoint => "breakpoint",
            EntryKind::Talkset => "talkset",
        }
    }
}

impl Playcut {
    /// Create a playcut without artwork.
    pub fn new(
        song_title: impl Into<String>,
        artist_name: impl Into<String>,
        release_title: impl Into<String>,
    ) -> Self {
        Self {
            song_title: song_title.into(),
            artist_name: artist_name.into(),
            release_title: release_title.into(),
            ..Default::default()
        }
    }
}
