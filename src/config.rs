use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

/// Top-level Luach configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct LuachConfig {
    /// Grid display settings.
    #[serde(default)]
    pub display: DisplayToml,

    /// Navigation settings.
    #[serde(default)]
    pub navigation: NavigationToml,
}

impl LuachConfig {
    /// Reads the configuration at `path`, or returns the defaults when no
    /// path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&toml_str).context("failed to parse TOML config")?;
        info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayToml {
    /// 0 = Sunday, ..., 6 = Saturday.
    #[serde(default)]
    pub first_day_of_week: u8,
    #[serde(default = "default_weekend_days")]
    pub weekend_days: Vec<u8>,
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

impl Default for DisplayToml {
    fn default() -> Self {
        Self {
            first_day_of_week: 0,
            weekend_days: default_weekend_days(),
            utc_offset_minutes: 0,
        }
    }
}

fn default_weekend_days() -> Vec<u8> {
    vec![0, 6]
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavigationToml {
    #[serde(default = "default_window_size")]
    pub window_size: usize,
}

impl Default for NavigationToml {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
        }
    }
}

fn default_window_size() -> usize {
    luach_grid::DEFAULT_WINDOW_SIZE
}
