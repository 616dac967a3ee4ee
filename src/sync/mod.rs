//! Keeps the held playlist in step with the remote log using small windows.

mod reconciler;
mod windows;

pub use reconciler::{PlaylistUpdate, Reconciler, SkipReason, TickOutcome};
pub use windows::{SyncWindows, WindowError};
