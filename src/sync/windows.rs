//! Window sizes for incremental sync.

/// How many head entries are compared per poll, and how many are cleared when
/// a new entry arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncWindows {
    /// Entries compared (and refetched) each tick
    pub compare: usize,
    /// Held entries dropped before inserting the fresh window on a new arrival
    pub clear_on_arrival: usize,
}

impl Default for SyncWindows {
    fn default() -> Self {
        Self {
            compare: 6,
            clear_on_arrival: 5,
        }
    }
}

/// Invalid window configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    #[error("comparison window must be at least 1")]
    EmptyWindow,

    #[error("clear window must be between 1 and the comparison window ({compare}), got {clear}")]
    ClearOutOfRange { clear: usize, compare: usize },

    #[error("window fetch size ({fetch}) is smaller than the comparison window ({compare})")]
    FetchTooSmall { fetch: usize, compare: usize },
}

impl SyncWindows {
    /// Check the sizes against each other and against the per-poll fetch size.
    pub fn validate(&self, fetch: usize) -> Result<(), WindowError> {
        if self.compare == 0 {
            return Err(WindowError::EmptyWindow);
        }
        if self.clear_on_arrival == 0 || self.clear_on_arrival > self.compare {
            return Err(WindowError::ClearOutOfRange {
                clear: self.clear_on_arrival,
                compare: self.compare,
            });
        }
        if fetch < self.compare {
            return Err(WindowError::FetchTooSmall {
                fetch,
                compare: self.compare,
            });
        }
        Ok(())
    }
}
