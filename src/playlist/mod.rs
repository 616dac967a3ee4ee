//! The station playlist: entry model, identity rules, the remote log, and the
//! locally held copy.

pub mod held;
pub mod log;
pub mod manager;
pub mod model;
pub mod ordering;

pub use held::HeldPlaylist;
pub use log::{LogError, PlaylistLogClient, PlaylistSource};
pub use manager::{FetchSizes, PlaylistManager};
pub use model::{EntryKind, Playcut, PlaylistEntry};
pub use ordering::{WindowChange, classify, same_content, same_sequence};
