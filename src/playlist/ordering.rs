//! Identity rules used to diff playlist windows.
//!
//! Only entry ids are compared. Two windows with the same ids in the same
//! order are the same window, even if a song title was corrected upstream.

use std::collections::HashSet;

use super::model::PlaylistEntry;

/// How a freshly fetched window differs from the held one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowChange {
    /// Same ids in the same order
    Unchanged,
    /// Same id set in a different order (a DJ edited the log)
    Edit,
    /// The id set changed, usually one or more entries added at the front
    NewArrival,
}

/// True iff both lists have the same length and the same id at every index.
pub fn same_sequence(a: &[PlaylistEntry], b: &[PlaylistEntry]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.id == y.id)
}

/// True iff both lists contain the same set of ids, regardless of order.
pub fn same_content(a: &[PlaylistEntry], b: &[PlaylistEntry]) -> bool {
    let ids_a: HashSet<i64> = a.iter().map(|e| e.id).collect();
    let ids_b: HashSet<i64> = b.iter().map(|e| e.id).collect();
    ids_a == ids_b
}

/// Classify a fetched window against the held window of the same size.
pub fn classify(fetched: &[PlaylistEntry], held: &[PlaylistEntry]) -> WindowChange {
    if same_sequence(fetched, held) {
        WindowChange::Unchanged
    } else if same_content(fetched, held) {
        WindowChange::Edit
    } else {
        WindowChange::NewArrival
    }
}
