//! Runtime configuration, read from JSON

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use gauge_core::{CategoryPrecision, GaugeError, PrecisionPolicy, Result};
use gauge_loader::ESSENTIAL_CATEGORIES;
use gauge_search::DEFAULT_LIMIT;

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "GAUGE_CONFIG";

/// Every field is optional in the file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GaugeConfig {
    /// Per-category precision overrides, merged over the built-in policy
    pub precision: HashMap<String, CategoryPrecision>,
    /// Loaded before the first request
    pub essential_categories: Vec<String>,
    /// Loaded in the background after startup
    pub preload_categories: Vec<String>,
    pub search_limit: usize,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        GaugeConfig {
            precision: HashMap::new(),
            essential_categories: ESSENTIAL_CATEGORIES.iter().map(|id| id.to_string()).collect(),
            preload_categories: ["volume", "time", "area", "speed"]
                .iter()
                .map(|id| id.to_string())
                .collect(),
            search_limit: DEFAULT_LIMIT,
        }
    }
}

impl GaugeConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| GaugeError::Config(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| GaugeError::Config(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "loading configuration");
        Self::from_json(&contents)
    }

    /// Read the file named by `GAUGE_CONFIG`; defaults when unset
    pub fn from_env() -> Result<Self> {
        match env::var(CONFIG_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim()),
            _ => Ok(Self::default()),
        }
    }

    /// Built-in precision policy with this config's overrides applied
    pub fn precision_policy(&self) -> PrecisionPolicy {
        PrecisionPolicy::default().merge(&self.precision)
    }
}
