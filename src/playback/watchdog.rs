//! Stops the stream when it has been playing muted for too long.
//!
//! Each check that sees the stream playing and muted bumps a counter. Once the
//! counter reaches the threshold while playing, the stream is stopped and the
//! counter starts over. By default an unmuted check does not reset the counter,
//! so two muted checks count even if they are far apart.

use super::status::PlaybackStatus;

/// What a single check decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchdogAction {
    /// Not playing, nothing observed
    Idle,
    /// Playing; counter after this check
    Observed(u32),
    /// Threshold reached, stop was issued
    Stopped,
}

/// Watchdog tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchdogSettings {
    /// Muted observations that trigger a stop
    pub threshold: u32,
    /// Reset the counter when a check sees the stream unmuted
    pub reset_on_unmute: bool,
}

impl Default for WatchdogSettings {
    fn default() -> Self {
        Self {
            threshold: 2,
            reset_on_unmute: false,
        }
    }
}

/// Mute counter driven by periodic checks.
#[derive(Debug)]
pub struct LivenessWatchdog {
    settings: WatchdogSettings,
    muted_checks: u32,
}

impl LivenessWatchdog {
    pub fn new(settings: WatchdogSettings) -> Self {
        Self {
            settings,
            muted_checks: 0,
        }
    }

    /// Current counter value.
    pub fn muted_checks(&self) -> u32 {
        self.muted_checks
    }

    /// Run one check against the current status.
    pub fn observe(&mut self, status: &PlaybackStatus) -> WatchdogAction {
        if !status.is_playing() {
            return WatchdogAction::Idle;
        }

        if status.is_muted() {
            self.muted_checks += 1;
            tracing::debug!(target: "watchdog", "Stream muted ({} checks)", self.muted_checks);
        } else if self.settings.reset_on_unmute {
            self.muted_checks = 0;
        }

        if self.muted_checks >= self.settings.threshold {
            tracing::info!(
                target: "watchdog",
                "Stream muted for {} checks, stopping playback",
                self.muted_checks
            );
            if let Err(e) = status.stop() {
                tracing::warn!(target: "watchdog", "Stop command not delivered: {}", e);
            }
            self.muted_checks = 0;
            return WatchdogAction::Stopped;
        }

        WatchdogAction::Observed(self.muted_checks)
    }
}
