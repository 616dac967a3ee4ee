//! WXYC Live - follows the station's live playlist.
//!
//! Keeps a local copy of the playlist log in sync with small windowed polls,
//! finds cover art for each playcut, and stops the stream if it has been
//! playing muted for too long.

pub mod artwork;
pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod playback;
pub mod playlist;
pub mod render;
pub mod session;
pub mod sync;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log events use short subsystem targets rather than the crate path.
const DEFAULT_LOG_FILTER: &str =
    "warn,wxyc_live=info,sync=info,playlist=info,artwork=info,session=info,watchdog=info";

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging; RUST_LOG replaces the defaults entirely
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();

    cli::run_command(&args)
}
