/// Service configuration loader - parses windmon.toml
///
/// Separates the feed location and the aggregation policy constants from
/// code, so the base URL or the tail-fold rule can be adjusted without
/// recompiling the service. Every value has a default; a missing file is
/// not an error.

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

use crate::analysis::directions::SectorTable;
use crate::analysis::windowing::WindowPolicy;
use crate::model::WindError;

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "windmon.toml";

/// Public station feed of the University of Innsbruck.
pub const DEFAULT_BASE_URL: &str = "http://meteo145.uibk.ac.at";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where and how to reach the station feed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Aggregation policy knobs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Trailing remainders (out of 6) folded back in as one extra hour.
    pub tail_fold_remainders: Vec<usize>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            tail_fold_remainders: WindowPolicy::default().tail_fold_remainders,
        }
    }
}

/// Root configuration structure for TOML parsing
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub feed: FeedConfig,
    pub policy: PolicyConfig,
}

impl Config {
    /// Parses configuration from TOML text. `origin` is only used in errors.
    pub fn from_toml_str(contents: &str, origin: &str) -> Result<Self, WindError> {
        let config: Config = toml::from_str(contents).map_err(|e| WindError::Config {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        config.validate(origin)?;
        Ok(config)
    }

    /// Loads configuration from a TOML file. A missing file yields defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, WindError> {
        let path = path.as_ref();
        let origin = path.display().to_string();

        if !path.exists() {
            tracing::debug!(path = %origin, "no configuration file, using defaults");
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| WindError::Config {
            path: origin.clone(),
            message: e.to_string(),
        })?;

        Self::from_toml_str(&contents, &origin)
    }

    /// Loads `.env`, then the file named by `WINDMON_CONFIG` (default
    /// `windmon.toml`), then applies the `WINDMON_BASE_URL` override.
    pub fn from_env() -> Result<Self, WindError> {
        dotenv::dotenv().ok();

        let path = env::var("WINDMON_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::load(&path)?;

        if let Ok(base_url) = env::var("WINDMON_BASE_URL") {
            if !base_url.trim().is_empty() {
                config.feed.base_url = base_url.trim().to_string();
            }
        }

        Ok(config)
    }

    pub fn window_policy(&self) -> WindowPolicy {
        WindowPolicy {
            tail_fold_remainders: self.policy.tail_fold_remainders.clone(),
        }
    }

    /// Always the clockwise compass table; the sector order is not configurable.
    pub fn sector_table(&self) -> SectorTable {
        SectorTable::default()
    }

    fn validate(&self, origin: &str) -> Result<(), WindError> {
        if self.feed.base_url.trim().is_empty() {
            return Err(WindError::Config {
                path: origin.to_string(),
                message: "feed.base_url must not be empty".to_string(),
            });
        }

        if let Some(bad) = self
            .policy
            .tail_fold_remainders
            .iter()
            .find(|r| **r == 0 || **r >= crate::model::SAMPLES_PER_HOUR)
        {
            return Err(WindError::Config {
                path: origin.to_string(),
                message: format!("tail_fold_remainders entry {} must be within 1..=5", bad),
            });
        }

        Ok(())
    }
}
