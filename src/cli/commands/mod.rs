//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `watch`: live session printing the playlist as it changes
//! - `playlist`: one-shot playlist fetch
//! - `artwork`: run the artwork chain for a single release
//! - `config`: show the effective configuration or write a default file

mod artwork;
mod config;
mod playlist;
mod watch;

use std::path::PathBuf;

use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use tokio::runtime::Runtime;

use crate::artwork::ArtworkChain;
use crate::config::Config;
use crate::error::{Result, ResultExt};
use crate::http;

pub use artwork::cmd_artwork;
pub use config::cmd_config;
pub use playlist::cmd_playlist;
pub use watch::cmd_watch;

/// WXYC live playlist CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: the OS config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Last.fm API key (overrides the config file)
    #[arg(long, global = true, env = "LASTFM_API_KEY", hide_env_values = true)]
    pub lastfm_api_key: Option<String>,

    /// Discogs consumer key (overrides the config file)
    #[arg(long, global = true, env = "DISCOGS_KEY", hide_env_values = true)]
    pub discogs_key: Option<String>,

    /// Discogs consumer secret (overrides the config file)
    #[arg(long, global = true, env = "DISCOGS_SECRET", hide_env_values = true)]
    pub discogs_secret: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Follow the live playlist (default)
    Watch {
        /// Print at most this many rows per refresh
        #[arg(long, default_value = "20")]
        rows: usize,
    },
    /// Fetch the playlist once and print it
    Playlist {
        /// Number of entries to fetch (default: playlist.full_count)
        #[arg(short = 'n', long)]
        count: Option<usize>,
        /// Resolve artwork for every playcut
        #[arg(long)]
        artwork: bool,
    },
    /// Look up artwork for one release
    Artwork {
        #[arg(long)]
        artist: String,
        #[arg(long)]
        release: String,
    },
    /// Show the config file path and effective settings
    Config {
        /// Write a config file with the default settings
        #[arg(long)]
        init: bool,
    },
}

/// Everything the commands share, built once from the config.
pub struct AppContext {
    pub config: Config,
    pub http: reqwest::Client,
    pub chain: ArtworkChain,
    pub time_zone: Tz,
}

impl AppContext {
    pub fn build(config: Config) -> Result<Self> {
        config.validate().with_context("invalid configuration")?;
        let time_zone = config.time_zone()?;
        let http = http::build_client(config.request_timeout())?;
        let chain = ArtworkChain::standard(http.clone(), &config.credentials);
        tracing::debug!(target: "artwork", "Artwork providers: {:?}", chain.provider_names());
        Ok(Self {
            config,
            http,
            chain,
            time_zone,
        })
    }
}

/// Load the config file and apply command-line overrides.
pub fn effective_config(cli: &Cli) -> Config {
    let mut config = match &cli.config {
        Some(path) => crate::config::load_from(path),
        None => crate::config::load(),
    };
    apply_overrides(cli, &mut config);
    config
}

fn apply_overrides(cli: &Cli, config: &mut Config) {
    if let Some(key) = &cli.lastfm_api_key {
        config.credentials.lastfm_api_key = Some(key.clone());
    }
    if let Some(key) = &cli.discogs_key {
        config.credentials.discogs_key = Some(key.clone());
    }
    if let Some(secret) = &cli.discogs_secret {
        config.credentials.discogs_secret = Some(secret.clone());
    }
}

/// Run the selected command; no command means `watch`.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let config = effective_config(cli);
    let command = cli
        .command
        .clone()
        .unwrap_or(Commands::Watch { rows: 20 });

    let context = || -> anyhow::Result<(Runtime, AppContext)> {
        Ok((Runtime::new()?, AppContext::build(config.clone())?))
    };

    match command {
        Commands::Watch { rows } => {
            let (rt, ctx) = context()?;
            cmd_watch(&rt, &ctx, rows)
        }
        Commands::Playlist { count, artwork } => {
            let (rt, ctx) = context()?;
            cmd_playlist(&rt, &ctx, count, artwork)
        }
        Commands::Artwork { artist, release } => {
            let (rt, ctx) = context()?;
            cmd_artwork(&rt, &ctx, &artist, &release)
        }
        Commands::Config { init } => cmd_config(cli.config.as_deref(), &config, init),
    }
}
