//! Live session: keeps the playlist fresh and watches the stream.
//!
//! Three tasks run for the lifetime of a session:
//!
//! - **sync**: cold start, then one reconciler tick per poll interval
//! - **watchdog**: one mute check per watchdog interval
//! - **render**: owns the surface and is the only writer of the held playlist
//!
//! The sync task hands each update to the render task and waits until it has
//! been applied before the next tick, so ticks always compare against what is
//! on screen.
//!
//! # Usage
//!
//! ```ignore
//! let session = LiveSession::new(reconciler, held, playback, settings);
//! let mut handle = session.start(Box::new(surface));
//! while let Some(event) = handle.next_event().await { /* ... */ }
//! ```

use std::time::Duration;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

use crate::config::Config;
use crate::playback::{LivenessWatchdog, PlaybackStatus, WatchdogAction, WatchdogSettings};
use crate::playlist::HeldPlaylist;
use crate::render::RenderSurface;
use crate::sync::{PlaylistUpdate, Reconciler, TickOutcome};

/// Timer settings for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub poll_initial_delay: Duration,
    pub poll_interval: Duration,
    pub watchdog_initial_delay: Duration,
    pub watchdog_interval: Duration,
    pub watchdog: WatchdogSettings,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            poll_initial_delay: Duration::from_secs(20),
            poll_interval: Duration::from_secs(30),
            watchdog_initial_delay: Duration::from_secs(30),
            watchdog_interval: Duration::from_secs(30),
            watchdog: WatchdogSettings::default(),
        }
    }
}

impl SessionSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            poll_initial_delay: Duration::from_secs(config.playlist.poll_initial_delay_secs),
            poll_interval: Duration::from_secs(config.playlist.poll_interval_secs),
            watchdog_initial_delay: Duration::from_secs(config.watchdog.initial_delay_secs),
            watchdog_interval: Duration::from_secs(config.watchdog.interval_secs),
            watchdog: config.watchdog_settings(),
        }
    }
}

/// Events emitted by a running session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Something went wrong but the session keeps running
    Notice(String),
    /// An update was applied; `rows` is the new row count
    Updated { kind: &'static str, rows: usize },
    /// The watchdog stopped the stream
    PlaybackStopped,
}

/// An update on its way to the render task.
struct RenderRequest {
    update: PlaylistUpdate,
    applied: oneshot::Sender<usize>,
}

/// A session that has not been started yet.
pub struct LiveSession {
    reconciler: Reconciler,
    held: HeldPlaylist,
    playback: PlaybackStatus,
    settings: SessionSettings,
}

impl LiveSession {
    pub fn new(
        reconciler: Reconciler,
        held: HeldPlaylist,
        playback: PlaybackStatus,
        settings: SessionSettings,
    ) -> Self {
        Self {
            reconciler,
            held,
            playback,
            settings,
        }
    }

    /// Spawn the session tasks. Must be called inside a tokio runtime.
    pub fn start(self, surface: Box<dyn RenderSurface>) -> SessionHandle {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (render_tx, render_rx) = mpsc::channel(4);

        tracing::info!(
            target: "session",
            "Session starting: poll every {:?}, mute check every {:?}",
            self.settings.poll_interval,
            self.settings.watchdog_interval
        );

        let render = tokio::spawn(run_render(self.held, surface, render_rx));
        let sync = tokio::spawn(run_sync(
            self.reconciler,
            render_tx,
            event_tx.clone(),
            shutdown_rx.clone(),
            self.settings,
        ));
        let watchdog = tokio::spawn(run_watchdog(
            self.playback.clone(),
            event_tx,
            shutdown_rx,
            self.settings,
        ));

        SessionHandle {
            shutdown_tx,
            event_rx,
            playback: self.playback,
            tasks: vec![sync, watchdog, render],
        }
    }
}

/// Handle to a running session.
pub struct SessionHandle {
    shutdown_tx: watch::Sender<bool>,
    event_rx: mpsc::UnboundedReceiver<SessionEvent>,
    playback: PlaybackStatus,
    tasks: Vec<JoinHandle<()>>,
}

impl SessionHandle {
    /// Next session event; `None` once every task has finished.
    pub async fn next_event(&mut self) -> Option<SessionEvent> {
        self.event_rx.recv().await
    }

    /// Stop the timers, wait for the tasks, and stop playback.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(true);
        for task in self.tasks {
            if let Err(e) = task.await {
                tracing::error!(target: "session", "Session task failed: {}", e);
            }
        }
        if let Err(e) = self.playback.stop() {
            tracing::debug!(target: "session", "Stop on shutdown: {}", e);
        }
        tracing::info!(target: "session", "Session stopped");
    }

    /// Forward events to `on_event` until Ctrl-C, then shut down.
    pub async fn run_until_ctrl_c(mut self, mut on_event: impl FnMut(&SessionEvent)) {
        loop {
            tokio::select! {
                result = tokio::signal::ctrl_c() => {
                    if let Err(e) = result {
                        tracing::warn!(target: "session", "Ctrl-C handler failed: {}", e);
                    }
                    tracing::info!(target: "session", "Interrupted, shutting down");
                    break;
                }
                event = self.event_rx.recv() => match event {
                    Some(event) => on_event(&event),
                    None => break,
                },
            }
        }
        self.shutdown().await;
    }
}

/// Apply updates in arrival order.
async fn run_render(
    held: HeldPlaylist,
    mut surface: Box<dyn RenderSurface>,
    mut render_rx: mpsc::Receiver<RenderRequest>,
) {
    while let Some(request) = render_rx.recv().await {
        request.update.apply(&held, surface.as_mut());
        let _ = request.applied.send(held.len());
    }
    tracing::debug!(target: "session", "Render task finished");
}

/// Hand an update to the render task and wait for it to land.
///
/// Returns the new row count, or `None` if the render task is gone.
async fn publish(render_tx: &mpsc::Sender<RenderRequest>, update: PlaylistUpdate) -> Option<usize> {
    let (applied, done) = oneshot::channel();
    render_tx.send(RenderRequest { update, applied }).await.ok()?;
    done.await.ok()
}

async fn run_sync(
    reconciler: Reconciler,
    render_tx: mpsc::Sender<RenderRequest>,
    event_tx: mpsc::UnboundedSender<SessionEvent>,
    mut shutdown: watch::Receiver<bool>,
    settings: SessionSettings,
) {
    let first_poll = Instant::now() + settings.poll_initial_delay;

    let cold = tokio::select! {
        _ = shutdown.changed() => return,
        update = reconciler.cold_start() => update,
    };
    match cold {
        Some(update) => {
            if !deliver(&render_tx, &event_tx, update).await {
                return;
            }
        }
        None => {
            tracing::warn!(target: "session", "Cold start failed, retrying on the next poll");
            let _ = event_tx.send(SessionEvent::Notice(
                "Couldn't load the playlist. Retrying shortly.".to_string(),
            ));
        }
    }

    let mut timer = interval_at(first_poll, settings.poll_interval);
    timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = shutdown.changed() => break,
            _ = timer.tick() => {
                match reconciler.tick().await {
                    TickOutcome::Update(update) => {
                        if !deliver(&render_tx, &event_tx, update).await {
                            break;
                        }
                    }
                    TickOutcome::Skipped(reason) => {
                        tracing::debug!(target: "session", "Tick skipped: {:?}", reason);
                    }
                    TickOutcome::Unchanged => {}
                }
            }
        }
    }
    tracing::debug!(target: "session", "Sync task finished");
}

/// Publish an update and report it. `false` if the render task is gone.
async fn deliver(
    render_tx: &mpsc::Sender<RenderRequest>,
    event_tx: &mpsc::UnboundedSender<SessionEvent>,
    update: PlaylistUpdate,
) -> bool {
    let kind = update.kind();
    match publish(render_tx, update).await {
        Some(rows) => {
            tracing::info!(target: "sync", "Applied {} update ({} rows)", kind, rows);
            let _ = event_tx.send(SessionEvent::Updated { kind, rows });
            true
        }
        None => {
            tracing::error!(target: "session", "Render task is gone, stopping sync");
            false
        }
    }
}

async fn run_watchdog(
    playback: PlaybackStatus,
    event_tx: mpsc::UnboundedSender<SessionEvent>,
    mut shutdown: watch::Receiver<bool>,
    settings: SessionSettings,
) {
    let mut watchdog = LivenessWatchdog::new(settings.watchdog);
    let mut timer = interval_at(
        Instant::now() + settings.watchdog_initial_delay,
        settings.watchdog_interval,
    );
    timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = shutdown.changed() => break,
            _ = timer.tick() => {
                if watchdog.observe(&playback) == WatchdogAction::Stopped {
                    let _ = event_tx.send(SessionEvent::PlaybackStopped);
                }
            }
        }
    }
    tracing::debug!(target: "watchdog", "Watchdog task finished");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::artwork::ArtworkChain;
    use crate::playback::PlaybackCommand;
    use crate::playlist::{FetchSizes, PlaylistManager};
    use crate::sync::SyncWindows;
    use crate::test_utils::{MockSource, RecordingSurface, ids};

    const WAIT: Duration = Duration::from_secs(5);

    fn fast_settings() -> SessionSettings {
        SessionSettings {
            poll_initial_delay: Duration::from_millis(20),
            poll_interval: Duration::from_millis(20),
            watchdog_initial_delay: Duration::from_secs(60),
            watchdog_interval: Duration::from_secs(60),
            watchdog: WatchdogSettings::default(),
        }
    }

    fn session(
        source: Arc<MockSource>,
        settings: SessionSettings,
    ) -> (
        LiveSession,
        HeldPlaylist,
        PlaybackStatus,
        crossbeam_channel::Receiver<PlaybackCommand>,
    ) {
        let manager = PlaylistManager::new(source, ArtworkChain::default(), FetchSizes::default());
        let held = HeldPlaylist::new();
        let reconciler = Reconciler::new(manager, held.clone(), SyncWindows::default());
        let (playback, player_rx) = PlaybackStatus::channel();
        let session = LiveSession::new(reconciler, held.clone(), playback.clone(), settings);
        (session, held, playback, player_rx)
    }

    async fn next(handle: &mut SessionHandle) -> SessionEvent {
        tokio::time::timeout(WAIT, handle.next_event())
            .await
            .expect("timed out waiting for a session event")
            .expect("session ended")
    }

    #[tokio::test]
    async fn test_cold_start_then_new_arrival() {
        let source = Arc::new(MockSource::with_ids(&[8, 7, 6, 5, 4, 3, 2, 1]));
        let (session, held, _playback, _rx) = session(source.clone(), fast_settings());
        let mut handle = session.start(Box::new(RecordingSurface::default()));

        assert_eq!(
            next(&mut handle).await,
            SessionEvent::Updated {
                kind: "replace",
                rows: 8
            }
        );
        assert_eq!(ids(&held.snapshot()), vec![8, 7, 6, 5, 4, 3, 2, 1]);

        source.set_ids(&[9, 8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(
            next(&mut handle).await,
            SessionEvent::Updated {
                kind: "new-arrival",
                rows: 9
            }
        );
        assert_eq!(ids(&held.snapshot()), vec![9, 8, 7, 6, 5, 4, 3, 2, 1]);

        handle.shutdown().await;
    }

    #[tokio::test]
    async fn test_failed_cold_start_is_a_notice() {
        let source = Arc::new(MockSource::with_ids(&[8, 7, 6, 5, 4, 3, 2, 1]));
        source.fail_next(1);
        let (session, held, _playback, _rx) = session(source, fast_settings());
        let mut handle = session.start(Box::new(RecordingSurface::default()));

        assert!(matches!(next(&mut handle).await, SessionEvent::Notice(_)));
        assert!(held.is_empty());

        // The next poll sees an empty list and does a full resync
        assert_eq!(
            next(&mut handle).await,
            SessionEvent::Updated {
                kind: "replace",
                rows: 8
            }
        );

        handle.shutdown().await;
    }

    #[tokio::test]
    async fn test_shutdown_stops_playback() {
        let source = Arc::new(MockSource::with_ids(&[3, 2, 1]));
        let (session, _held, playback, player_rx) = session(source, fast_settings());
        playback.set_playing(true);
        let mut handle = session.start(Box::new(RecordingSurface::default()));
        next(&mut handle).await;

        handle.shutdown().await;
        assert_eq!(player_rx.try_recv(), Ok(PlaybackCommand::Stop));
    }

    #[tokio::test]
    async fn test_watchdog_stops_muted_stream() {
        let source = Arc::new(MockSource::failing());
        let settings = SessionSettings {
            poll_initial_delay: Duration::from_secs(60),
            poll_interval: Duration::from_secs(60),
            watchdog_initial_delay: Duration::from_millis(10),
            watchdog_interval: Duration::from_millis(10),
            watchdog: WatchdogSettings::default(),
        };
        let (session, _held, playback, player_rx) = session(source, settings);
        playback.set_playing(true);
        playback.set_muted(true);
        let mut handle = session.start(Box::new(RecordingSurface::default()));

        // The failed cold start also reports a notice; skip it
        loop {
            match next(&mut handle).await {
                SessionEvent::PlaybackStopped => break,
                SessionEvent::Notice(_) => continue,
                other => panic!("unexpected event {:?}", other),
            }
        }
        assert_eq!(player_rx.try_recv(), Ok(PlaybackCommand::Stop));

        handle.shutdown().await;
    }

    #[test]
    fn test_settings_from_config() {
        let mut config = Config::default();
        config.playlist.poll_interval_secs = 45;
        config.watchdog.reset_on_unmute = true;

        let settings = SessionSettings::from_config(&config);
        assert_eq!(settings.poll_initial_delay, Duration::from_secs(20));
        assert_eq!(settings.poll_interval, Duration::from_secs(45));
        assert_eq!(settings.watchdog_initial_delay, Duration::from_secs(30));
        assert!(settings.watchdog.reset_on_unmute);
        assert_eq!(
            SessionSettings::from_config(&Config::default()),
            SessionSettings::default()
        );
    }
}
