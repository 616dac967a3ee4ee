//! Live session in the terminal.

use std::sync::Arc;

use tokio::runtime::Runtime;

use super::AppContext;
use crate::playback::PlaybackStatus;
use crate::playlist::{HeldPlaylist, PlaylistLogClient, PlaylistManager};
use crate::render::{PlaylistRows, TerminalSurface};
use crate::session::{LiveSession, SessionEvent, SessionSettings};
use crate::sync::Reconciler;

/// Follow the live playlist until Ctrl-C.
pub fn cmd_watch(rt: &Runtime, ctx: &AppContext, max_rows: usize) -> anyhow::Result<()> {
    let source = Arc::new(PlaylistLogClient::new(
        ctx.http.clone(),
        ctx.config.playlist.log_url.clone(),
    ));
    let manager = PlaylistManager::new(source, ctx.chain.clone(), ctx.config.fetch_sizes());
    let held = HeldPlaylist::new();
    let reconciler = Reconciler::new(manager, held.clone(), ctx.config.sync_windows());

    // No stream player in the terminal build; commands are only logged.
    let (playback, player_rx) = PlaybackStatus::channel();
    std::thread::spawn(move || {
        for command in player_rx.iter() {
            tracing::info!(target: "session", "Player command: {:?}", command);
        }
    });

    let surface = TerminalSurface::new(PlaylistRows::new(held.clone(), ctx.time_zone), max_rows);
    let session = LiveSession::new(
        reconciler,
        held,
        playback,
        SessionSettings::from_config(&ctx.config),
    );

    println!("Following {} (Ctrl-C to stop)", ctx.config.playlist.log_url);

    rt.block_on(async {
        let handle = session.start(Box::new(surface));
        handle
            .run_until_ctrl_c(|event| match event {
                SessionEvent::Notice(message) => eprintln!("! {}", message),
                SessionEvent::PlaybackStopped => println!("Stream stopped: muted too long"),
                SessionEvent::Updated { .. } => {}
            })
            .await;
    });

    Ok(())
}
