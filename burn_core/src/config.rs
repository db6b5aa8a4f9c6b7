//! Configuration file support for fuelburn.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/fuelburn/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub body: BodyConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Body weight defaults and the range accepted from callers
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BodyConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_weight_kg: Option<f64>,

    #[serde(default = "default_min_weight_kg")]
    pub min_weight_kg: f64,

    #[serde(default = "default_max_weight_kg")]
    pub max_weight_kg: f64,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            default_weight_kg: None,
            min_weight_kg: default_min_weight_kg(),
            max_weight_kg: default_max_weight_kg(),
        }
    }
}

/// Activity and food catalog sources
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// Custom activity catalog file; the built-in catalog is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Custom food table; the built-in food list is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foods_path: Option<PathBuf>,
}

// Default value functions
fn default_min_weight_kg() -> f64 {
    20.0
}

fn default_max_weight_kg() -> f64 {
    300.0
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
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join("fuelburn")
            .join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        let body = &self.body;
        if !(body.min_weight_kg > 0.0 && body.min_weight_kg <= body.max_weight_kg) {
            return Err(Error::Config(format!(
                "Weight range {}-{} kg is invalid",
                body.min_weight_kg, body.max_weight_kg
            )));
        }
        if let Some(weight) = body.default_weight_kg {
            self.check_weight(weight).map_err(|_| {
                Error::Config(format!("Default weight {} kg is out of range", weight))
            })?;
        }
        Ok(())
    }

    /// Check a body weight against the configured range
    pub fn check_weight(&self, weight_kg: f64) -> Result<f64> {
        let body = &self.body;
        let in_range = weight_kg >= body.min_weight_kg && weight_kg <= body.max_weight_kg;
        if weight_kg.is_finite() && in_range {
            Ok(weight_kg)
        } else {
            Err(Error::InvalidInput(format!(
                "Please enter a valid weight between {}-{} kg (got {})",
                body.min_weight_kg, body.max_weight_kg, weight_kg
            )))
        }
    }
}
