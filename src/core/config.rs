//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.pagerange/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::range::{
    DEFAULT_CENTER_PAGES, DEFAULT_ELLIPSIS, DEFAULT_MARGIN_PAGES, DisplayBudget, RangeError,
};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PagerConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PaginationConfig {
    pub margin_pages: Option<usize>,
    pub center_pages: Option<usize>,
    pub ellipsis: Option<String>,
}

/// Values given on the command line. `None` = flag not given.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub margin_pages: Option<usize>,
    pub center_pages: Option<usize>,
    pub ellipsis: Option<String>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub budget: DisplayBudget,
    pub ellipsis: String,
    pub log_level: LevelFilter,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Invalid(reason) => write!(f, "invalid config: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<RangeError> for ConfigError {
    fn from(e: RangeError) -> Self {
        ConfigError::Invalid(e.to_string())
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.pagerange/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".pagerange").join("config.toml"))
}

/// Load config from `~/.pagerange/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PagerConfig::default()`.
pub fn load_config() -> Result<PagerConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PagerConfig::default());
        }
    };
    load_config_from(&path)
}

/// Load config from an explicit path. Same missing-file behavior as `load_config`.
pub fn load_config_from(path: &Path) -> Result<PagerConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(PagerConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: PagerConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# pagerange configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"

# [pagination]
# margin_pages = 1                   # Or set PAGERANGE_MARGIN_PAGES
# center_pages = 4                   # At least 2. Or set PAGERANGE_CENTER_PAGES
# ellipsis = "…"                     # Or set PAGERANGE_ELLIPSIS
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
pub fn resolve(config: &PagerConfig, cli: &CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as `resolve`, with the environment lookup injected.
pub fn resolve_with_env(
    config: &PagerConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    // Margin pages: CLI → env → config → default
    let margin_pages = cli
        .margin_pages
        .or_else(|| env_usize(&env, "PAGERANGE_MARGIN_PAGES"))
        .or(config.pagination.margin_pages)
        .unwrap_or(DEFAULT_MARGIN_PAGES);

    // Center pages: CLI → env → config → default
    let center_pages = cli
        .center_pages
        .or_else(|| env_usize(&env, "PAGERANGE_CENTER_PAGES"))
        .or(config.pagination.center_pages)
        .unwrap_or(DEFAULT_CENTER_PAGES);

    // Ellipsis: CLI → env → config → default
    let ellipsis = cli
        .ellipsis
        .clone()
        .or_else(|| env("PAGERANGE_ELLIPSIS"))
        .or_else(|| config.pagination.ellipsis.clone())
        .unwrap_or_else(|| DEFAULT_ELLIPSIS.to_string());
    if ellipsis.trim().is_empty() {
        return Err(ConfigError::Invalid("ellipsis must not be blank".to_string()));
    }

    let log_level = match config.general.log_level.as_deref() {
        Some(level) => level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::Invalid(format!("unknown log level: {level}")))?,
        None => LevelFilter::Debug,
    };

    Ok(ResolvedConfig {
        budget: DisplayBudget::new(margin_pages, center_pages)?,
        ellipsis,
        log_level,
    })
}

fn env_usize(env: &impl Fn(&str) -> Option<String>, key: &str) -> Option<usize> {
    let raw = env(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {key}={raw:?}: not a non-negative integer");
            None
        }
    }
}
