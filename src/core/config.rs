//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.surah/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::quran_com::DEFAULT_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SurahConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub source: SourceConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Display language for chapter names and chapter info.
    pub language: Option<String>,
    /// Translation edition attached to verses.
    pub translation_id: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SourceConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub verses_per_page: Option<u32>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LANGUAGE: &str = "id";
pub const DEFAULT_TRANSLATION_ID: u32 = 33;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_VERSES_PER_PAGE: u32 = 50;
/// Largest page size the verses endpoint accepts.
pub const MAX_VERSES_PER_PAGE: u32 = 50;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub language: String,
    pub translation_id: u32,
    pub base_url: String,
    pub timeout_secs: u64,
    pub verses_per_page: u32,
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub language: Option<String>,
    pub translation_id: Option<u32>,
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

/// Returns the path to `~/.surah/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".surah").join("config.toml"))
}

/// Load config from `~/.surah/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SurahConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SurahConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SurahConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(SurahConfig::default());
    }

    load_config_from(&path)
}

/// Parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<SurahConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: SurahConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Surah Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults -> this file -> env vars -> CLI flags.

# [general]
# language = "id"                    # chapter names and chapter info language
# translation_id = 33                # translation edition shown under each verse

# [source]
# base_url = "https://api.quran.com/api/v4"
# timeout_secs = 30
# verses_per_page = 50               # 1..=50
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &SurahConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// `resolve` with an explicit environment lookup.
pub fn resolve_with_env(
    config: &SurahConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Language: CLI → env → config → default
    let language = cli
        .language
        .clone()
        .or_else(|| env("SURAH_LANGUAGE"))
        .or_else(|| config.general.language.clone())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

    // Translation: CLI → env → config → default
    let translation_id = cli
        .translation_id
        .or_else(|| {
            env("SURAH_TRANSLATION").and_then(|raw| match raw.trim().parse() {
                Ok(id) => Some(id),
                Err(_) => {
                    warn!("Ignoring SURAH_TRANSLATION={raw:?}: not a number");
                    None
                }
            })
        })
        .or(config.general.translation_id)
        .unwrap_or(DEFAULT_TRANSLATION_ID);

    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| env("SURAH_BASE_URL"))
        .or_else(|| config.source.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let verses_per_page = config
        .source
        .verses_per_page
        .unwrap_or(DEFAULT_VERSES_PER_PAGE)
        .clamp(1, MAX_VERSES_PER_PAGE);

    ResolvedConfig {
        language,
        translation_id,
        base_url,
        timeout_secs: config
            .source
            .timeout_secs
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS),
        verses_per_page,
    }
}
