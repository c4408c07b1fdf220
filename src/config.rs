//! Configuration loading for the guide

use crate::error::{GuideError, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Main configuration structure
#[derive(Clone, Debug, Deserialize)]
pub struct GuideConfig {
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Animation timing settings
#[derive(Clone, Debug, Deserialize)]
pub struct AnimationConfig {
    /// Wall-clock duration of one animation run in milliseconds (default: 3000)
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,

    /// Host tick rate in ticks per second (default: 60)
    #[serde(default = "default_tick_hz")]
    pub tick_hz: u32,
}

/// Destination catalog source
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CatalogConfig {
    /// Path to a TOML catalog file; the builtin catalog is used when unset
    #[serde(default)]
    pub path: Option<String>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            tick_hz: default_tick_hz(),
        }
    }
}

// Default value functions
fn default_duration_ms() -> u64 {
    3000
}
fn default_tick_hz() -> u32 {
    60
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            animation: AnimationConfig::default(),
            catalog: CatalogConfig::default(),
        }
    }
}

impl GuideConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| GuideError::Config(format!("Failed to read config file: {}", e)))?;
        let config: GuideConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Animation run duration as a [`Duration`]
    pub fn run_duration(&self) -> Duration {
        Duration::from_millis(self.animation.duration_ms)
    }
}
