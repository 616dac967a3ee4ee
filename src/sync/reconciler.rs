//! Incremental playlist sync.
//!
//! Each tick pulls only the newest `compare` entries of the log and compares
//! their ids against the head of the held list:
//!
//! - same ids, same order: nothing to do
//! - same ids, new order: a DJ edited the log, rewrite the head in place
//! - different ids: something new arrived, drop the first `clear_on_arrival`
//!   held entries and put the fresh window in front
//!
//! `clear_on_arrival` is one less than `compare` by default. When more than
//! `compare - clear_on_arrival` entries arrive between two polls, the overflow
//! is not shown until the next full refresh. That trade is intentional: the
//! narrow clear keeps artwork lookups per tick small.

use super::windows::SyncWindows;
use crate::playlist::{HeldPlaylist, PlaylistEntry, PlaylistManager, WindowChange, classify};
use crate::render::RenderSurface;

/// A change to apply to the held playlist.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaylistUpdate {
    /// Replace everything (cold start or full resync)
    Replace(Vec<PlaylistEntry>),
    /// Same ids reordered: rewrite the head in place
    Edit(Vec<PlaylistEntry>),
    /// New ids: drop `clear` head entries, insert `entries` in front
    NewArrival {
        entries: Vec<PlaylistEntry>,
        clear: usize,
    },
}

/// Why a tick did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The full fetch came back empty
    FullFetchFailed,
    /// The window fetch came back empty
    WindowFetchFailed,
    /// The window had fewer entries than the comparison needs
    ShortWindow(usize),
    /// The second, artwork-resolved fetch failed or came back short
    RefreshFailed,
}

/// Result of one reconciler tick.
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    Unchanged,
    Skipped(SkipReason),
    Update(PlaylistUpdate),
}

impl PlaylistUpdate {
    /// Apply the update to the held list and notify the surface.
    ///
    /// Must run on the task that owns the surface.
    pub fn apply(self, held: &HeldPlaylist, surface: &mut dyn RenderSurface) {
        match self {
            PlaylistUpdate::Replace(entries) => {
                held.replace_all(entries);
                surface.notify_all_changed();
            }
            PlaylistUpdate::Edit(entries) => {
                let count = entries.len();
                held.replace_prefix(count, entries);
                surface.notify_range_changed(0, count);
            }
            PlaylistUpdate::NewArrival { entries, clear } => {
                held.replace_prefix(clear, entries);
                surface.notify_all_changed();
            }
        }
    }

    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            PlaylistUpdate::Replace(_) => "replace",
            PlaylistUpdate::Edit(_) => "edit",
            PlaylistUpdate::NewArrival { .. } => "new-arrival",
        }
    }
}

/// Decides, once per poll, how the held playlist should change.
///
/// The reconciler only reads the held list; updates are applied elsewhere via
/// [`PlaylistUpdate::apply`].
pub struct Reconciler {
    manager: PlaylistManager,
    held: HeldPlaylist,
    windows: SyncWindows,
}

impl Reconciler {
    pub fn new(manager: PlaylistManager, held: HeldPlaylist, windows: SyncWindows) -> Self {
        Self {
            manager,
            held,
            windows,
        }
    }

    pub fn windows(&self) -> SyncWindows {
        self.windows
    }

    /// Fetch the whole playlist with artwork. `None` if the fetch failed.
    pub async fn cold_start(&self) -> Option<PlaylistUpdate> {
        let entries = self.manager.fetch_full().await;
        if entries.is_empty() {
            tracing::warn!(target: "sync", "Full playlist fetch returned nothing");
            return None;
        }
        Some(PlaylistUpdate::Replace(entries))
    }

    /// Run one poll.
    pub async fn tick(&self) -> TickOutcome {
        let compare = self.windows.compare;

        if self.held.len() < compare {
            tracing::info!(
                target: "sync",
                "Held playlist has {} entries (< {}), doing a full resync",
                self.held.len(),
                compare
            );
            return match self.cold_start().await {
                Some(update) => TickOutcome::Update(update),
                None => TickOutcome::Skipped(SkipReason::FullFetchFailed),
            };
        }

        let mut window = self.manager.fetch_window().await;
        if window.is_empty() {
            tracing::debug!(target: "sync", "Window fetch returned nothing, skipping tick");
            return TickOutcome::Skipped(SkipReason::WindowFetchFailed);
        }
        window.truncate(compare);
        if window.len() < compare {
            tracing::debug!(target: "sync", "Window has only {} entries, skipping tick", window.len());
            return TickOutcome::Skipped(SkipReason::ShortWindow(window.len()));
        }

        let head = self.held.prefix(compare);
        let change = classify(&window, &head);
        if change == WindowChange::Unchanged {
            tracing::trace!(target: "sync", "No playlist change");
            return TickOutcome::Unchanged;
        }

        tracing::debug!(target: "sync", "Playlist head changed: {:?}", change);

        let mut refreshed = self.manager.fetch_window_with_artwork().await;
        refreshed.truncate(compare);
        if refreshed.len() < compare {
            tracing::warn!(target: "sync", "Refresh fetch returned {} entries, skipping tick", refreshed.len());
            return TickOutcome::Skipped(SkipReason::RefreshFailed);
        }

        let update = match change {
            WindowChange::Edit => PlaylistUpdate::Edit(refreshed),
            _ => PlaylistUpdate::NewArrival {
                entries: refreshed,
                clear: self.windows.clear_on_arrival,
            },
        };
        TickOutcome::Update(update)
    }
}
