//! Configuration management using Figment
//!
//! Configuration is loaded from multiple sources with the following precedence (highest to lowest):
//! 1. Environment variables (prefix: QUERY_PAGER_)
//! 2. Current working directory: ./config.toml
//! 3. XDG config directory: ~/.config/query-pager/config.toml
//! 4. Default values
//!
//! Keys are flat, e.g. `QUERY_PAGER_MAX_PAGE_SIZE=200` or
//! `default_page_size = 50` in TOML.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::query::SortDirection;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "QUERY_PAGER_";

fn config_error(message: impl Into<String>) -> Error {
    Error::from(figment::Error::from(message.into()))
}

/// Pager configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerConfig {
    /// Page size used when a client does not send one
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,

    /// Largest page size a request may ask for (unbounded when unset)
    #[serde(default)]
    pub max_page_size: Option<u32>,

    /// Direction used when a client names a sort field without a direction
    #[serde(default)]
    pub default_sort_direction: SortDirection,

    /// Log level (trace, debug, info, warn, error) or an EnvFilter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_page_size() -> u32 {
    20
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: None,
            default_sort_direction: SortDirection::default(),
            log_level: default_log_level(),
        }
    }
}

impl PagerConfig {
    /// Load configuration from all sources
    ///
    /// Environment variables (QUERY_PAGER_ prefix) override all file-based configs.
    pub fn load() -> Result<Self> {
        let config_paths = Self::find_config_paths();

        tracing::debug!("Searching for config files in order:");
        for path in &config_paths {
            tracing::debug!("  - {}", path.display());
        }

        let mut figment = Figment::new().merge(Serialized::defaults(PagerConfig::default()));

        // Lowest priority first so later merges win
        for path in config_paths.iter().rev() {
            if path.exists() {
                tracing::info!("Loading pager configuration from: {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
        }

        let config: Self = figment.merge(Env::prefixed(ENV_PREFIX)).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// This bypasses the XDG lookup. Environment variables still override
    /// values from the file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Self = Figment::new()
            .merge(Serialized::defaults(PagerConfig::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    /// Check that the page size bounds are usable together
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when `default_page_size` is zero or exceeds
    /// `max_page_size`, or when `max_page_size` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.default_page_size == 0 {
            return Err(config_error("default_page_size must be at least 1"));
        }
        match self.max_page_size {
            Some(0) => Err(config_error("max_page_size must be at least 1")),
            Some(max) if self.default_page_size > max => Err(config_error(format!(
                "default_page_size ({}) exceeds max_page_size ({max})",
                self.default_page_size
            ))),
            _ => Ok(()),
        }
    }

    /// Candidate config file paths, highest priority first
    fn find_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("config.toml")];

        let xdg_dirs = xdg::BaseDirectories::with_prefix("query-pager");
        if let Some(path) = xdg_dirs.find_config_file("config.toml") {
            paths.push(path);
        }

        paths
    }
}
