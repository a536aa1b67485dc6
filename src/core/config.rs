//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.folio/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::input::{DEFAULT_TOUCH_THRESHOLD, DEFAULT_WHEEL_THRESHOLD};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub input: InputConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub transition_ms: Option<u64>,
    pub content_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct InputConfig {
    pub wheel_threshold: Option<i32>,
    pub wheel_step: Option<i32>,
    pub touch_threshold: Option<i32>,
    pub cell_height: Option<i32>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TRANSITION_MS: u64 = 800;
/// Lower bound on the lock duration; shorter values make the slide-in unreadable.
pub const MIN_TRANSITION_MS: u64 = 100;
/// Synthetic delta reported for one terminal wheel notch.
pub const DEFAULT_WHEEL_STEP: i32 = 100;
/// Synthetic units per terminal row when a mouse drag stands in for a swipe.
pub const DEFAULT_CELL_HEIGHT: i32 = 20;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub transition: Duration,
    pub content_file: Option<PathBuf>,
    pub wheel_threshold: i32,
    pub wheel_step: i32,
    pub touch_threshold: i32,
    pub cell_height: i32,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub transition_ms: Option<u64>,
    pub content_file: Option<PathBuf>,
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

/// Returns the path to `~/.folio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".folio").join("config.toml"))
}

/// Load config from `~/.folio/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FolioConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FolioConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FolioConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(FolioConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<FolioConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Folio Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# transition_ms = 800                # Slide lock duration (FOLIO_TRANSITION_MS)
# content_file = "portfolio.toml"    # Relative to ~/.folio/, or absolute (FOLIO_CONTENT)

# [input]
# wheel_threshold = 50               # Wheel delta needed to change slide
# wheel_step = 100                   # Delta reported per wheel notch
# touch_threshold = 50               # Drag distance needed to change slide
# cell_height = 20                   # Drag units per terminal row
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
pub fn resolve(config: &FolioConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], with the environment lookup injected.
pub fn resolve_with_env(
    config: &FolioConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Transition: CLI → env → config → default
    let transition_ms = cli
        .transition_ms
        .or_else(|| match env("FOLIO_TRANSITION_MS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) => Some(ms),
                Err(e) => {
                    warn!("Ignoring FOLIO_TRANSITION_MS={:?}: {}", raw, e);
                    None
                }
            },
            None => None,
        })
        .or(config.general.transition_ms)
        .unwrap_or(DEFAULT_TRANSITION_MS);

    if transition_ms < MIN_TRANSITION_MS {
        warn!(
            "transition_ms={} is below the minimum, using {}",
            transition_ms, MIN_TRANSITION_MS
        );
    }
    let transition = Duration::from_millis(transition_ms.max(MIN_TRANSITION_MS));

    // Content file: CLI → env → config (relative to ~/.folio/) → bundled
    let content_file = cli
        .content_file
        .clone()
        .or_else(|| env("FOLIO_CONTENT").map(PathBuf::from))
        .or_else(|| {
            config
                .general
                .content_file
                .as_ref()
                .map(|file| resolve_config_relative(file))
        });

    ResolvedConfig {
        transition,
        content_file,
        wheel_threshold: at_least(
            "wheel_threshold",
            config.input.wheel_threshold.unwrap_or(DEFAULT_WHEEL_THRESHOLD),
            0,
        ),
        wheel_step: at_least(
            "wheel_step",
            config.input.wheel_step.unwrap_or(DEFAULT_WHEEL_STEP),
            1,
        ),
        touch_threshold: at_least(
            "touch_threshold",
            config.input.touch_threshold.unwrap_or(DEFAULT_TOUCH_THRESHOLD),
            0,
        ),
        cell_height: at_least(
            "cell_height",
            config.input.cell_height.unwrap_or(DEFAULT_CELL_HEIGHT),
            1,
        ),
    }
}

fn at_least(name: &str, value: i32, min: i32) -> i32 {
    if value < min {
        warn!("{}={} is below the minimum, using {}", name, value, min);
        return min;
    }
    value
}

/// Relative content paths in the config file are anchored at `~/.folio/`.
fn resolve_config_relative(file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        return path;
    }
    match dirs::home_dir() {
        Some(home) => home.join(".folio").join(path),
        None => path,
    }
}
