//! The held playlist shared between the sync task, the render owner and readers.
//!
//! Mutation is restricted to bulk replace and bounded prefix replace. There is
//! no per-index setter; the render-owner task is the only caller of either.

use std::sync::Arc;

use parking_lot::RwLock;

use super::model::PlaylistEntry;

/// Cloneable handle to the ordered, newest-first playlist.
#[derive(Debug, Clone, Default)]
pub struct HeldPlaylist {
    entries: Arc<RwLock<Vec<PlaylistEntry>>>,
}

impl HeldPlaylist {
    /// Create an empty playlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of held entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Consistent copy of the whole list.
    pub fn snapshot(&self) -> Vec<PlaylistEntry> {
        self.entries.read().clone()
    }

    /// Copy of the first `n` entries (fewer if the list is shorter).
    pub fn prefix(&self, n: usize) -> Vec<PlaylistEntry> {
        let entries = self.entries.read();
        entries[..n.min(entries.len())].to_vec()
    }

    /// Entry at `position`, if any.
    pub fn get(&self, position: usize) -> Option<PlaylistEntry> {
        self.entries.read().get(position).cloned()
    }

    /// Replace the whole list (cold start or full resync).
    pub fn replace_all(&self, entries: Vec<PlaylistEntry>) {
        *self.entries.write() = entries;
    }

    /// Remove up to `clear` leading entries and insert `front` in their place.
    ///
    /// `front` may be longer than `clear`; the list then grows.
    pub fn replace_prefix(&self, clear: usize, front: Vec<PlaylistEntry>) {
        let mut entries = self.entries.write();
        let clear = clear.min(entries.len());
        entries.splice(..clear, front);
    }
}
