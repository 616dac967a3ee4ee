//! One-shot playlist fetch.

use chrono_tz::Tz;
use tokio::runtime::Runtime;

use super::AppContext;
use crate::error::ResultExt;
use crate::playlist::{PlaylistEntry, PlaylistLogClient};
use crate::render::{format_row, to_row};

/// Fetch the most recent entries and print them as rows.
pub fn cmd_playlist(
    rt: &Runtime,
    ctx: &AppContext,
    count: Option<usize>,
    artwork: bool,
) -> anyhow::Result<()> {
    let count = count.unwrap_or(ctx.config.playlist.full_count);
    let client = PlaylistLogClient::new(ctx.http.clone(), ctx.config.playlist.log_url.clone());

    rt.block_on(async {
        let mut entries = client
            .recent_entries(count)
            .await
            .with_context("fetching the playlist")?;

        if artwork {
            let resolved = ctx.chain.resolve_playlist(&mut entries).await;
            println!("Resolved artwork for {} entries", resolved);
        }

        println!("{} entries", entries.len());
        for (position, entry) in entries.iter().enumerate() {
            println!("{}", playlist_line(position, entry, ctx.time_zone));
        }
        Ok::<(), anyhow::Error>(())
    })
}

/// Position, row, and the record label when the log has one.
fn playlist_line(position: usize, entry: &PlaylistEntry, time_zone: Tz) -> String {
    let mut line = format!("{:>3}  {}", position, format_row(&to_row(entry, time_zone)));
    if let Some(playcut) = entry.as_playcut().filter(|p| !p.label_name.is_empty()) {
        line.push_str(&format!("  ({})", playcut.label_name));
    }
    line
}
