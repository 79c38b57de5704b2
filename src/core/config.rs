//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.typeahead/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::engine::Timing;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TypeaheadConfig {
    #[serde(default)]
    pub dictionary: DictionaryConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DictionaryConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TimingConfig {
    pub debounce_ms: Option<u64>,
    pub preview_interval_ms: Option<u64>,
    pub render_throttle_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub frame_queue_capacity: Option<usize>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DICTIONARY_PATH: &str = "words.txt";
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;
pub const DEFAULT_PREVIEW_INTERVAL_MS: u64 = 200;
pub const DEFAULT_RENDER_THROTTLE_MS: u64 = 50;
pub const DEFAULT_FRAME_QUEUE_CAPACITY: usize = 1000;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub dictionary_path: PathBuf,
    pub debounce: Duration,
    pub preview_interval: Duration,
    pub render_throttle: Duration,
    pub frame_queue_capacity: usize,
}

impl ResolvedConfig {
    pub fn timing(&self) -> Timing {
        Timing {
            debounce: self.debounce,
            preview_interval: self.preview_interval,
            render_throttle: self.render_throttle,
        }
    }
}

/// Overrides given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub dictionary: Option<PathBuf>,
    pub debounce_ms: Option<u64>,
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

/// Returns the path to `~/.typeahead/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".typeahead").join("config.toml"))
}

/// Load config from `~/.typeahead/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TypeaheadConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TypeaheadConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TypeaheadConfig::default());
        }
    };

    if !path.exists() {
        info!(
            "No config file found, generating default at {}",
            path.display()
        );
        generate_default_config(&path);
        return Ok(TypeaheadConfig::default());
    }

    load_config_from(&path)
}

/// Parse the config file at `path`.
pub fn load_config_from(path: &Path) -> Result<TypeaheadConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: TypeaheadConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Typeahead Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [dictionary]
# path = "words.txt"                 # Or TYPEAHEAD_DICTIONARY / --dictionary

# [timing]
# debounce_ms = 200                  # Pause before suggesting
#                                    # Or TYPEAHEAD_DEBOUNCE_MS / --debounce-ms
# preview_interval_ms = 200          # Blink cadence of the previewed completion
# render_throttle_ms = 50            # Minimum gap between screen redraws

# [display]
# frame_queue_capacity = 1000
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

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &TypeaheadConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &TypeaheadConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Dictionary: CLI → env → config → default
    let dictionary_path = cli
        .dictionary
        .clone()
        .or_else(|| env("TYPEAHEAD_DICTIONARY").map(PathBuf::from))
        .or_else(|| config.dictionary.path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DICTIONARY_PATH));

    // Debounce: CLI → env → config → default
    let debounce_ms = cli
        .debounce_ms
        .or_else(|| {
            env("TYPEAHEAD_DEBOUNCE_MS").and_then(|v| match v.parse() {
                Ok(ms) => Some(ms),
                Err(_) => {
                    warn!("Ignoring invalid TYPEAHEAD_DEBOUNCE_MS={:?}", v);
                    None
                }
            })
        })
        .or(config.timing.debounce_ms)
        .unwrap_or(DEFAULT_DEBOUNCE_MS);

    ResolvedConfig {
        dictionary_path,
        debounce: Duration::from_millis(debounce_ms),
        // A zero period makes the blink interval panic.
        preview_interval: Duration::from_millis(
            config
                .timing
                .preview_interval_ms
                .unwrap_or(DEFAULT_PREVIEW_INTERVAL_MS)
                .max(1),
        ),
        render_throttle: Duration::from_millis(
            config
                .timing
                .render_throttle_ms
                .unwrap_or(DEFAULT_RENDER_THROTTLE_MS),
        ),
        // A zero-capacity channel panics on creation.
        frame_queue_capacity: config
            .display
            .frame_queue_capacity
            .unwrap_or(DEFAULT_FRAME_QUEUE_CAPACITY)
            .max(1),
    }
}
