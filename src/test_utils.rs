//! Test utilities and fixtures for wxyc-live tests.
//!
//! Provides playlist fixtures, a scripted [`PlaylistSource`] and a render
//! surface that records notifications instead of drawing.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{MockSource, entries, ids};
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let source = MockSource::with_ids(&[3, 2, 1]);
//!     source.fail_next(1);
//!     // ... test logic
//! }
//! ```

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::playlist::{LogError, Playcut, PlaylistEntry, PlaylistSource};
use crate::render::RenderSurface;

/// Playcut entries with the given ids, newest first.
///
/// Titles are derived from the id so that entries stay distinguishable:
///
/// ```ignore
/// let list = entries(&[2, 1]);
/// assert_eq!(list[0].as_playcut().unwrap().song_title, "Song 2");
/// ```
pub fn entries(ids: &[i64]) -> Vec<PlaylistEntry> {
    ids.iter()
        .map(|&id| {
            PlaylistEntry::playcut(
                id,
                Playcut::new(
                    &format!("Song {}", id),
                    &format!("Artist {}", id),
                    &format!("Release {}", id),
                ),
            )
        })
        .collect()
}

/// The ids of a list, in order.
pub fn ids(entries: &[PlaylistEntry]) -> Vec<i64> {
    entries.iter().map(|e| e.id).collect()
}

#[derive(Debug, Default)]
struct SourceState {
    remote: Vec<PlaylistEntry>,
    requested: Vec<usize>,
    fail_next: usize,
    fail_after: Option<usize>,
    always_fail: bool,
}

/// A scripted remote log.
///
/// Serves the first `count` entries of its list and records every request.
/// Failures can be scheduled with [`MockSource::fail_next`] and
/// [`MockSource::fail_after`].
#[derive(Debug, Default)]
pub struct MockSource {
    state: Mutex<SourceState>,
}

impl MockSource {
    /// A log holding playcuts with these ids.
    pub fn with_ids(ids: &[i64]) -> Self {
        Self {
            state: Mutex::new(SourceState {
                remote: entries(ids),
                ..Default::default()
            }),
        }
    }

    /// A log that never answers.
    pub fn failing() -> Self {
        Self {
            state: Mutex::new(SourceState {
                always_fail: true,
                ..Default::default()
            }),
        }
    }

    /// Replace the remote list, e.g. to simulate a new arrival.
    pub fn set_ids(&self, ids: &[i64]) {
        self.state.lock().remote = entries(ids);
    }

    /// Fail the next `n` requests.
    pub fn fail_next(&self, n: usize) {
        self.state.lock().fail_next = n;
    }

    /// Answer the next `n` requests, fail everything after.
    pub fn fail_after(&self, n: usize) {
        let mut state = self.state.lock();
        let served = state.requested.len();
        state.fail_after = Some(served + n);
    }

    /// Counts of every request so far.
    pub fn requested(&self) -> Vec<usize> {
        self.state.lock().requested.clone()
    }
}

#[async_trait]
impl PlaylistSource for MockSource {
    async fn fetch_recent(&self, count: usize) -> Result<Vec<PlaylistEntry>, LogError> {
        let mut state = self.state.lock();
        state.requested.push(count);
        let call = state.requested.len();

        if state.always_fail {
            return Err(LogError::Network("mock source is down".to_string()));
        }
        if state.fail_next > 0 {
            state.fail_next -= 1;
            return Err(LogError::Network("scheduled failure".to_string()));
        }
        if state.fail_after.is_some_and(|limit| call > limit) {
            return Err(LogError::Http("HTTP 503: Service Unavailable".to_string()));
        }

        Ok(state.remote.iter().take(count).cloned().collect())
    }
}

/// A notification seen by [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Range(usize, usize),
    All,
}

/// Render surface that only records what it was told.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub notices: Vec<Notice>,
}

impl RenderSurface for RecordingSurface {
    fn notify_range_changed(&mut self, start: usize, count: usize) {
        self.notices.push(Notice::Range(start, count));
    }

    fn notify_all_changed(&mut self) {
        self.notices.push(Notice::All);
    }
}
