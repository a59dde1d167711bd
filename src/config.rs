//! Configuration management for MovieFlix
//!
//! Handles config file loading/saving and catalog path resolution.
//! Config is stored at ~/.config/movieflix/config.toml

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Catalog file picked up from the working directory when nothing else
/// is configured.
pub const DEFAULT_CATALOG_FILE: &str = "movies.json";

/// Recommendations returned when no limit is configured.
pub const DEFAULT_LIMIT: usize = 10;

/// Environment variable overriding the catalog location.
pub const CATALOG_ENV_VAR: &str = "MOVIEFLIX_CATALOG";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default catalog file location
    pub catalog_path: Option<PathBuf>,
    /// Default recommendation count (1-20)
    pub default_limit: Option<usize>,
}

impl Config {
    /// Get config file path (~/.config/movieflix/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("movieflix").join("config.toml"))
    }

    /// Load config from file, or return default if not found
    pub fn load() -> Self {
        Self::path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::path().ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    /// Resolve the catalog path with fallback chain:
    /// 1. `--catalog` flag
    /// 2. `MOVIEFLIX_CATALOG` environment variable
    /// 3. `catalog_path` from the config file
    /// 4. `movies.json` in the working directory
    pub fn resolve_catalog(&self, flag: Option<&Path>) -> PathBuf {
        if let Some(path) = flag {
            return path.to_path_buf();
        }

        if let Ok(path) = std::env::var(CATALOG_ENV_VAR) {
            return PathBuf::from(path);
        }

        if let Some(ref path) = self.catalog_path {
            return path.clone();
        }

        PathBuf::from(DEFAULT_CATALOG_FILE)
    }

    /// Effective recommendation limit, clamped to the valid range.
    pub fn limit(&self) -> usize {
        self.default_limit.unwrap_or(DEFAULT_LIMIT).clamp(1, 20)
    }
}
