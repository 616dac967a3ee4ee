//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\wxyc-live\config.toml
//! - macOS: ~/Library/Application Support/wxyc-live/config.toml
//! - Linux: ~/.config/wxyc-live/config.toml
//!
//! Every section is optional; missing fields fall back to their defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::playback::WatchdogSettings;
use crate::playlist::FetchSizes;
use crate::playlist::log::DEFAULT_LOG_URL;
use crate::sync::{SyncWindows, WindowError};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API credentials for the artwork providers
    pub credentials: Credentials,

    /// Playlist log and sync timing
    pub playlist: PlaylistConfig,

    /// Muted-stream watchdog
    pub watchdog: WatchdogConfig,

    /// Display settings
    pub display: DisplayConfig,

    /// HTTP settings
    pub network: NetworkConfig,
}

/// API credentials
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// Last.fm API key
    pub lastfm_api_key: Option<String>,

    /// Discogs consumer key
    pub discogs_key: Option<String>,

    /// Discogs consumer secret
    pub discogs_secret: Option<String>,
}

/// Playlist log and sync settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaylistConfig {
    /// Recent-entries endpoint of the playlist log
    pub log_url: String,

    /// Entries fetched on cold start and full resync
    pub full_count: usize,

    /// Entries compared each poll
    pub window_size: usize,

    /// Entries fetched each poll; at least `window_size`
    pub window_fetch: usize,

    /// Held entries cleared when a new entry arrives
    pub new_entry_clear: usize,

    pub poll_initial_delay_secs: u64,

    pub poll_interval_secs: u64,
}

impl Default for PlaylistConfig {
    fn default() -> Self {
        Self {
            log_url: DEFAULT_LOG_URL.to_string(),
            full_count: 50,
            window_size: 6,
            window_fetch: 7,
            new_entry_clear: 5,
            poll_initial_delay_secs: 20,
            poll_interval_secs: 30,
        }
    }
}

/// Watchdog settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchdogConfig {
    pub initial_delay_secs: u64,

    pub interval_secs: u64,

    /// Muted checks before the stream is stopped
    pub mute_threshold: u32,

    /// Whether an unmuted check resets the counter
    pub reset_on_unmute: bool,
}

impl Default for WatchdogConfig {
    fn default() -> Self {
        Self {
            initial_delay_secs: 30,
            interval_secs: 30,
            mute_threshold: 2,
            reset_on_unmute: false,
        }
    }
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// IANA zone used for breakpoint hour labels
    pub time_zone: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time_zone: "America/New_York".to_string(),
        }
    }
}

/// Network settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Per-request timeout for every HTTP call
    pub request_timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 10,
        }
    }
}

impl Config {
    /// Check that the settings can run a session.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sync_windows().validate(self.playlist.window_fetch)?;

        if self.playlist.full_count < self.playlist.window_fetch {
            return Err(ConfigError::Invalid(format!(
                "playlist.full_count ({}) must be at least playlist.window_fetch ({})",
                self.playlist.full_count, self.playlist.window_fetch
            )));
        }
        if self.playlist.poll_interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "playlist.poll_interval_secs must be positive".to_string(),
            ));
        }
        if self.watchdog.interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "watchdog.interval_secs must be positive".to_string(),
            ));
        }
        if self.watchdog.mute_threshold == 0 {
            return Err(ConfigError::Invalid(
                "watchdog.mute_threshold must be at least 1".to_string(),
            ));
        }
        if self.network.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "network.request_timeout_secs must be positive".to_string(),
            ));
        }
        self.time_zone()?;
        Ok(())
    }

    pub fn sync_windows(&self) -> SyncWindows {
        SyncWindows {
            compare: self.playlist.window_size,
            clear_on_arrival: self.playlist.new_entry_clear,
        }
    }

    pub fn fetch_sizes(&self) -> FetchSizes {
        FetchSizes {
            full: self.playlist.full_count,
            window: self.playlist.window_fetch,
        }
    }

    pub fn watchdog_settings(&self) -> WatchdogSettings {
        WatchdogSettings {
            threshold: self.watchdog.mute_threshold,
            reset_on_unmute: self.watchdog.reset_on_unmute,
        }
    }

    pub fn time_zone(&self) -> Result<Tz, ConfigError> {
        self.display
            .time_zone
            .parse::<Tz>()
            .map_err(|e| ConfigError::TimeZone(self.display.time_zone.clone(), e.to_string()))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.network.request_timeout_secs)
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("wxyc-live"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location.
///
/// Returns default config if the file doesn't exist or can't be parsed.
pub fn load() -> Config {
    match config_path() {
        Some(path) => load_from(&path),
        None => {
            tracing::warn!("Could not determine config directory, using defaults");
            Config::default()
        }
    }
}

/// Load configuration from `path`, falling back to defaults.
pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match read(path) {
        Ok(config) => {
            tracing::info!("Loaded config from {:?}", path);
            config
        }
        Err(e) => {
            tracing::error!("{}", e);
            tracing::warn!("Using default configuration");
            Config::default()
        }
    }
}

/// Read and parse a config file.
pub fn read(path: &Path) -> Result<Config, ConfigError> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
    toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
}

/// Save configuration to `path`.
///
/// Creates the parent directory if it doesn't exist.
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;
    }

    let contents = to_toml(config)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| ConfigError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

/// Pretty TOML for display or saving.
pub fn to_toml(config: &Config) -> Result<String, ConfigError> {
    toml::to_string_pretty(config).map_err(ConfigError::Serialize)
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read config file {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("Failed to parse config file {0}: {1}")]
    Parse(PathBuf, toml::de::Error),

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),

    #[error("Invalid sync windows: {0}")]
    Windows(#[from] WindowError),

    #[error("Unknown time zone {0:?}: {1}")]
    TimeZone(String, String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let toml = to_toml(&Config::default()).unwrap();
        assert!(toml.contains("[credentials]"));
        assert!(toml.contains("[playlist]"));
        assert!(toml.contains("[watchdog]"));
        assert!(toml.contains("[display]"));
        assert!(toml.contains("[network]"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.sync_windows(), SyncWindows::default());
        assert_eq!(config.fetch_sizes(), FetchSizes::default());
        assert_eq!(config.watchdog_settings(), WatchdogSettings::default());
        assert_eq!(config.time_zone().unwrap(), chrono_tz::America::New_York);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.playlist.poll_initial_delay_secs, 20);
        assert_eq!(config.watchdog.initial_delay_secs, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml = r#"
[credentials]
lastfm_api_key = "my-key"

[watchdog]
reset_on_unmute = true
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.credentials.lastfm_api_key, Some("my-key".to_string()));
        assert_eq!(config.credentials.discogs_key, None);
        assert!(config.watchdog.reset_on_unmute);
        assert_eq!(config.watchdog.mute_threshold, 2);
        assert_eq!(config.playlist.window_size, 6);
        assert_eq!(config.playlist.window_fetch, 7);
        assert_eq!(config.display.time_zone, "America/New_York");
    }

    #[test]
    fn test_validate_rejects_bad_windows() {
        let mut config = Config::default();
        config.playlist.new_entry_clear = 7;
        assert!(matches!(config.validate(), Err(ConfigError::Windows(_))));

        config.playlist.new_entry_clear = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Windows(_))));

        config.playlist.window_size = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Windows(WindowError::EmptyWindow))
        ));
    }

    #[test]
    fn test_validate_rejects_short_window_fetch() {
        let mut config = Config::default();
        config.playlist.window_fetch = 6;
        assert!(config.validate().is_ok());
        assert_eq!(config.fetch_sizes().window, 6);

        config.playlist.window_fetch = 5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Windows(WindowError::FetchTooSmall {
                fetch: 5,
                compare: 6
            }))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.display.time_zone = "Mars/Olympus_Mons".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::TimeZone(..))));

        let mut config = Config::default();
        config.playlist.poll_interval_secs = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = Config::default();
        config.playlist.full_count = 3;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.credentials.discogs_key = Some("key".to_string());
        config.playlist.poll_interval_secs = 45;
        save_to(&config, &path).unwrap();

        assert_eq!(read(&path).unwrap(), config);
        assert_eq!(load_from(&path), config);
    }

    #[test]
    fn test_bad_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "playlist = [not toml").unwrap();

        assert!(matches!(read(&path), Err(ConfigError::Parse(..))));
        assert_eq!(load_from(&path), Config::default());
        assert_eq!(load_from(&dir.path().join("missing.toml")), Config::default());
    }
}
