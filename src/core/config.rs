//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.cardflip/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::navigator::ExhaustedNext;
use crate::deck::build_url;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CardflipConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub sets: Vec<SetEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub base_url: Option<String>,
    pub on_exhausted_next: Option<ExhaustedNext>,
    pub default_set: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

/// A named deck offered by the set picker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SetEntry {
    pub id: String,
    pub title: String,
    pub file_name: String,
    pub description: Option<String>,
}

impl SetEntry {
    fn builtin(id: &str, title: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            file_name: format!("{id}.json"),
            description: Some(description.to_string()),
        }
    }
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = ".";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Sets offered when the config file lists none.
pub fn builtin_sets() -> Vec<SetEntry> {
    vec![
        SetEntry::builtin("ncp200", "NCP 200", "Overview / Compute / Storage"),
        SetEntry::builtin(
            "ncp202",
            "NCP 202",
            "Network / Media / Database / Management / Analytics",
        ),
        SetEntry::builtin("ncp207", "NCP 207", "Troubleshooting"),
    ]
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Where the player gets its deck from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Pick from the configured sets; Esc returns to the picker.
    Picker { initial: Option<String> },
    /// A single fixed deck; no picker.
    Fixed(String),
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub on_exhausted: ExhaustedNext,
    pub data_source: DataSource,
    pub request_timeout: Duration,
    pub sets: Vec<SetEntry>,
}

impl ResolvedConfig {
    /// Full location of a set's deck document.
    pub fn set_location(&self, set: &SetEntry) -> String {
        build_url(&self.base_url, &set.file_name)
    }

    pub fn find_set(&self, id: &str) -> Option<&SetEntry> {
        self.sets.iter().find(|s| s.id == id)
    }
}

/// CLI flags that participate in resolution (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub source: Option<String>,
    pub set: Option<String>,
    pub on_exhausted: Option<ExhaustedNext>,
    pub base_url: Option<String>,
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

/// Returns the path to `~/.cardflip/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".cardflip").join("config.toml"))
}

/// Load config from `~/.cardflip/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CardflipConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<CardflipConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(CardflipConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(CardflipConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<CardflipConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: CardflipConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Cardflip Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# base_url = "https://example.com/decks"   # Or a local directory; default "."
# on_exhausted_next = "clamp"              # "clamp" or "prompt-restart"
# default_set = "ncp200"                   # Open this set directly
# request_timeout_secs = 30

# [[sets]]
# id = "ncp200"
# title = "NCP 200"
# file_name = "ncp200.json"
# description = "Overview / Compute / Storage"
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
pub fn resolve(config: &CardflipConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// [`resolve`] with an explicit environment lookup.
pub fn resolve_with_env(
    config: &CardflipConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| env("CARDFLIP_BASE_URL"))
        .or_else(|| config.general.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Exhausted-next mode: CLI → env → config → default
    let on_exhausted = cli
        .on_exhausted
        .or_else(|| {
            env("CARDFLIP_ON_EXHAUSTED").and_then(|v| {
                let parsed = ExhaustedNext::parse(&v);
                if parsed.is_none() {
                    warn!("Ignoring unknown CARDFLIP_ON_EXHAUSTED value: {}", v);
                }
                parsed
            })
        })
        .or(config.general.on_exhausted_next)
        .unwrap_or_default();

    // A fixed source skips the picker entirely
    let data_source = match &cli.source {
        Some(source) => DataSource::Fixed(source.clone()),
        None => DataSource::Picker {
            initial: cli.set.clone().or_else(|| config.general.default_set.clone()),
        },
    };

    let sets = if config.sets.is_empty() {
        builtin_sets()
    } else {
        config.sets.clone()
    };

    ResolvedConfig {
        base_url,
        on_exhausted,
        data_source,
        request_timeout: Duration::from_secs(
            config
                .general
                .request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        ),
        sets,
    }
}
