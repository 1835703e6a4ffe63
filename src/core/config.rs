//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.lingua/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LinguaConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Curriculum file path or http(s) URL.
    pub data: Option<String>,
    /// External command used for fire-and-forget audio playback.
    pub audio_player: Option<String>,
    /// Deep-link applied at startup, e.g. "unit=2&topic=1&part=3".
    pub start_location: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DATA_SOURCE: &str = "data.json";
pub const DEFAULT_AUDIO_PLAYER: &str = "mpv";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub data_source: String,
    pub audio_player: String,
    pub start_location: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.lingua/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".lingua").join("config.toml"))
}

/// Load config from `~/.lingua/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `LinguaConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LinguaConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(LinguaConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(LinguaConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: LinguaConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Lingua Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# data = "data.json"                   # Curriculum path or http(s) URL
# audio_player = "mpv"                 # Command used to play audio clips
# start_location = "unit=1"            # Deep link applied at startup
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env
/// vars → CLI. `cli_data` and `cli_at` come from CLI flags (None = not
/// specified).
pub fn resolve(
    config: &LinguaConfig,
    cli_data: Option<&str>,
    cli_at: Option<&str>,
) -> ResolvedConfig {
    // Data source: CLI → env → config → default
    let data_source = cli_data
        .map(|s| s.to_string())
        .or_else(|| std::env::var("LINGUA_DATA").ok())
        .or_else(|| config.general.data.clone())
        .unwrap_or_else(|| DEFAULT_DATA_SOURCE.to_string());

    // Audio player: env → config → default
    let audio_player = std::env::var("LINGUA_AUDIO_PLAYER")
        .ok()
        .or_else(|| config.general.audio_player.clone())
        .unwrap_or_else(|| DEFAULT_AUDIO_PLAYER.to_string());

    // Start location: CLI → config
    let start_location = cli_at
        .map(|s| s.to_string())
        .or_else(|| config.general.start_location.clone());

    ResolvedConfig {
        data_source,
        audio_player,
        start_location,
    }
}
