//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.dine/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::filter::{FilterSelection, SortOrder};
use crate::core::reveal::DEFAULT_PAGE_SIZE;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DineConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub page_size: Option<usize>,
    pub default_city: Option<String>,
    pub default_sort: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub image_base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "https://restaurant-api.dicoding.dev";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://restaurant-api.dicoding.dev/images/medium";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub image_base_url: String,
    pub timeout_secs: u64,
    pub page_size: usize,
    pub initial_selection: FilterSelection,
}

/// Values passed on the command line (None = flag not given).
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub city: Option<String>,
    pub sort: Option<String>,
    pub page_size: Option<usize>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.dine/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".dine").join("config.toml"))
}

/// Load config from `~/.dine/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `DineConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<DineConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(DineConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<DineConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(DineConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: DineConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Dine Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# page_size = 5                      # Reviews revealed per "Load More" (or DINE_PAGE_SIZE)
# default_city = "bali"              # Pre-selected city filter
# default_sort = "a-z"               # "a-z", "z-a", or "" for API order

# [api]
# base_url = "https://restaurant-api.dicoding.dev"   # Or set DINE_API_URL env var
# image_base_url = "https://restaurant-api.dicoding.dev/images/medium"
# timeout_secs = 10
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &DineConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as `resolve`, reading env vars through `env`.
pub fn resolve_with_env<F>(config: &DineConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| env("DINE_API_URL"))
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let image_base_url = config
        .api
        .image_base_url
        .clone()
        .unwrap_or_else(|| DEFAULT_IMAGE_BASE_URL.to_string());

    // Page size: CLI → env → config → default. Unparseable env is ignored.
    let env_page_size = env("DINE_PAGE_SIZE").and_then(|raw| match raw.trim().parse::<usize>() {
        Ok(n) => Some(n),
        Err(e) => {
            warn!("Ignoring DINE_PAGE_SIZE={:?}: {}", raw, e);
            None
        }
    });
    let page_size = cli
        .page_size
        .or(env_page_size)
        .or(config.general.page_size)
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .max(1);

    // Filters: CLI → config. Unknown sort values fall back to no sort.
    let city = cli
        .city
        .as_deref()
        .or(config.general.default_city.as_deref());
    let sort = cli
        .sort
        .as_deref()
        .or(config.general.default_sort.as_deref())
        .map(|raw| {
            let sort = SortOrder::parse(raw);
            if sort == SortOrder::None && !raw.trim().is_empty() {
                warn!("Unknown sort {:?}, keeping API order", raw);
            }
            sort
        })
        .unwrap_or_default();

    ResolvedConfig {
        base_url,
        image_base_url,
        timeout_secs: config.api.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        page_size,
        initial_selection: FilterSelection::new(city, sort),
    }
}
