//! Show the effective configuration, or write a default config file.

use std::path::{Path, PathBuf};

use anyhow::bail;

use crate::config::{self, Config, ConfigError};

/// Print where the config lives and what is in effect, secrets masked.
///
/// With `init`, write the default settings to the config file instead.
pub fn cmd_config(path: Option<&Path>, effective: &Config, init: bool) -> anyhow::Result<()> {
    if init {
        let written = init_config(path)?;
        println!("Wrote default config to {}", written.display());
        return Ok(());
    }

    match path.map(Path::to_path_buf).or_else(config::config_path) {
        Some(path) if path.exists() => println!("# Config file: {}", path.display()),
        Some(path) => println!("# Config file: {} (not found, using defaults)", path.display()),
        None => println!("# No config directory on this system, using defaults"),
    }

    if let Err(e) = effective.validate() {
        println!("# Warning: {}", e);
    }

    println!();
    print!("{}", config::to_toml(&masked(effective))?);
    Ok(())
}

/// Write `Config::default()` to `path` or the default location.
///
/// Refuses to overwrite an existing file.
fn init_config(path: Option<&Path>) -> anyhow::Result<PathBuf> {
    let target = path
        .map(Path::to_path_buf)
        .or_else(config::config_path)
        .ok_or(ConfigError::NoConfigDir)?;
    if target.exists() {
        bail!("{} already exists, not overwriting", target.display());
    }
    config::save_to(&Config::default(), &target)?;
    Ok(target)
}

fn masked(config: &Config) -> Config {
    let mask = |value: &Option<String>| value.as_ref().map(|_| "********".to_string());
    let mut shown = config.clone();
    shown.credentials.lastfm_api_key = mask(&config.credentials.lastfm_api_key);
    shown.credentials.discogs_key = mask(&config.credentials.discogs_key);
    shown.credentials.discogs_secret = mask(&config.credentials.discogs_secret);
    shown
}
