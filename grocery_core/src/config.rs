//! Configuration file support for Grocer.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/grocer/config.toml`.

use crate::catalog::MAX_SHELF_LIFE_DAYS;
use crate::engine::{DEFAULT_RECENT_MAX_DAYS, DEFAULT_RECENT_MIN_DAYS, DEFAULT_STAPLE_STALE_DAYS};
use crate::expiry::DEFAULT_EXPIRING_SOON_DAYS;
use crate::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub rules: RulesConfig,
}

/// Additions to the built-in catalog
#[derive(Clone, Debug, Deserialize, Default)]
pub struct CatalogConfig {
    /// Extra or replacement healthier alternatives
    #[serde(default)]
    pub alternatives: HashMap<String, String>,

    /// Extra or replacement shelf lives, in days
    #[serde(default)]
    pub shelf_life: HashMap<String, u32>,

    /// Replaces the built-in staple list when present
    #[serde(default)]
    pub staples: Option<Vec<String>>,

    #[serde(default)]
    pub default_shelf_life_days: Option<u32>,
}

/// Thresholds used by the suggestion and expiry rules
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RulesConfig {
    #[serde(default = "default_recent_min_days")]
    pub recent_min_days: i64,

    #[serde(default = "default_recent_max_days")]
    pub recent_max_days: i64,

    #[serde(default = "default_staple_stale_days")]
    pub staple_stale_days: i64,

    #[serde(default = "default_expiring_soon_days")]
    pub expiring_soon_days: i64,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            recent_min_days: default_recent_min_days(),
            recent_max_days: default_recent_max_days(),
            staple_stale_days: default_staple_stale_days(),
            expiring_soon_days: default_expiring_soon_days(),
        }
    }
}

// Default value functions
fn default_recent_min_days() -> i64 {
    DEFAULT_RECENT_MIN_DAYS
}

fn default_recent_max_days() -> i64 {
    DEFAULT_RECENT_MAX_DAYS
}

fn default_staple_stale_days() -> i64 {
    DEFAULT_STAPLE_STALE_DAYS
}

fn default_expiring_soon_days() -> i64 {
    DEFAULT_EXPIRING_SOON_DAYS
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            std::env::var_os("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .unwrap_or_else(|| PathBuf::from("."))
        });
        base.join("grocer").join("config.toml")
    }

    /// Reject rule windows that can never match and out-of-range shelf lives
    pub fn validate(&self) -> Result<()> {
        let rules = &self.rules;

        if rules.recent_min_days < 0 || rules.staple_stale_days < 0 || rules.expiring_soon_days < 0
        {
            return Err(Error::Config("rule thresholds must not be negative".into()));
        }

        if rules.recent_min_days > rules.recent_max_days {
            return Err(Error::Config(format!(
                "recent_min_days ({}) is greater than recent_max_days ({})",
                rules.recent_min_days, rules.recent_max_days
            )));
        }

        if self.catalog.default_shelf_life_days == Some(0) {
            return Err(Error::Config(
                "default_shelf_life_days must be at least 1".into(),
            ));
        }

        if let Some(days) = self.catalog.default_shelf_life_days {
            if days > MAX_SHELF_LIFE_DAYS {
                return Err(Error::Config(format!(
                    "default_shelf_life_days ({}) exceeds {} days",
                    days, MAX_SHELF_LIFE_DAYS
                )));
            }
        }

        for (name, days) in &self.catalog.shelf_life {
            if *days > MAX_SHELF_LIFE_DAYS {
                return Err(Error::Config(format!(
                    "shelf life for '{}' ({}) exceeds {} days",
                    name, days, MAX_SHELF_LIFE_DAYS
                )));
            }
        }

        Ok(())
    }
}
