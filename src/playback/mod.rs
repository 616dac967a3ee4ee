//! Live stream playback state and the mute watchdog.
//!
//! The stream player itself lives outside this crate; it receives
//! [`PlaybackCommand`]s and keeps [`PlaybackStatus`] up to date.

mod status;
mod watchdog;

pub use status::{PlaybackCommand, PlaybackError, PlaybackStatus};
pub use watchdog::{LivenessWatchdog, WatchdogAction, WatchdogSettings};
