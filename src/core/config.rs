//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.atlas/config.toml`. If missing on first run, a
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
pub struct AtlasConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub geometry: GeometryConfig,
    #[serde(default)]
    pub map: MapConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeometryConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MapConfig {
    /// Glyph drawn at the capital's coordinates.
    pub marker: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_API_BASE_URL: &str = "https://restcountries.com/v3.1";
pub const DEFAULT_GEO_BASE_URL: &str =
    "https://raw.githubusercontent.com/johan/world.geo.json/master/countries";
pub const DEFAULT_MAP_MARKER: &str = "◉";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub geo_base_url: String,
    pub map_marker: String,
}

/// Base-URL overrides coming from CLI flags (None = not specified).
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub api_base_url: Option<String>,
    pub geo_base_url: Option<String>,
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

/// Returns the path to `~/.atlas/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".atlas").join("config.toml"))
}

/// Load config from `~/.atlas/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `AtlasConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<AtlasConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(AtlasConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(AtlasConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: AtlasConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Atlas Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [api]
# base_url = "https://restcountries.com/v3.1"

# [geometry]
# base_url = "https://raw.githubusercontent.com/johan/world.geo.json/master/countries"

# [map]
# marker = "◉"           # Glyph drawn at the capital on the map
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
pub fn resolve(config: &AtlasConfig, cli: &CliOverrides) -> ResolvedConfig {
    // API base URL: CLI → env → config → default
    let api_base_url = cli
        .api_base_url
        .clone()
        .or_else(|| std::env::var("ATLAS_API_BASE_URL").ok())
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

    // Geometry base URL: CLI → env → config → default
    let geo_base_url = cli
        .geo_base_url
        .clone()
        .or_else(|| std::env::var("ATLAS_GEO_BASE_URL").ok())
        .or_else(|| config.geometry.base_url.clone())
        .unwrap_or_else(|| DEFAULT_GEO_BASE_URL.to_string());

    // Marker glyph: config → default (no env/CLI override)
    let map_marker = config
        .map
        .marker
        .clone()
        .unwrap_or_else(|| DEFAULT_MAP_MARKER.to_string());

    ResolvedConfig {
        api_base_url,
        geo_base_url,
        map_marker,
    }
}
