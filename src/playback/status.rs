//! Shared playback status and the command channel to the stream player.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossbeam_channel::{Receiver, Sender, TrySendError, bounded};

/// Commands sent to the playback subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    /// Stop the live stream
    Stop,
}

/// Errors from the playback handle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaybackError {
    #[error("Playback command channel closed")]
    ChannelClosed,
}

#[derive(Debug, Default)]
struct Flags {
    playing: AtomicBool,
    muted: AtomicBool,
    preparing: AtomicBool,
    connected: AtomicBool,
}

/// Cloneable view of the stream player's state.
///
/// The playback subsystem owns the setters; everything else only reads, except
/// for [`PlaybackStatus::stop`].
#[derive(Debug, Clone)]
pub struct PlaybackStatus {
    flags: Arc<Flags>,
    command_tx: Sender<PlaybackCommand>,
}

impl PlaybackStatus {
    /// Create a status handle and the receiving end for the player.
    pub fn channel() -> (Self, Receiver<PlaybackCommand>) {
        let (command_tx, command_rx) = bounded(8);
        let status = Self {
            flags: Arc::new(Flags::default()),
            command_tx,
        };
        (status, command_rx)
    }

    pub fn is_playing(&self) -> bool {
        self.flags.playing.load(Ordering::Acquire)
    }

    pub fn is_muted(&self) -> bool {
        self.flags.muted.load(Ordering::Acquire)
    }

    pub fn is_preparing(&self) -> bool {
        self.flags.preparing.load(Ordering::Acquire)
    }

    pub fn has_connection(&self) -> bool {
        self.flags.connected.load(Ordering::Acquire)
    }

    pub fn set_playing(&self, playing: bool) {
        self.flags.playing.store(playing, Ordering::Release);
    }

    pub fn set_muted(&self, muted: bool) {
        self.flags.muted.store(muted, Ordering::Release);
    }

    pub fn set_preparing(&self, preparing: bool) {
        self.flags.preparing.store(preparing, Ordering::Release);
    }

    pub fn set_connected(&self, connected: bool) {
        self.flags.connected.store(connected, Ordering::Release);
    }

    /// Ask the player to stop.
    ///
    /// Only sends the command; the player clears `is_playing` once it has
    /// actually stopped.
    pub fn stop(&self) -> Result<(), PlaybackError> {
        match self.command_tx.try_send(PlaybackCommand::Stop) {
            // Stop is the only command, so a full queue already holds one
            Ok(()) | Err(TrySendError::Full(_)) => Ok(()),
            Err(TrySendError::Disconnected(_)) => Err(PlaybackError::ChannelClosed),
        }
    }
}
