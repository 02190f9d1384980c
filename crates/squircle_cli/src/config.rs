//! squircle.toml handling
//!
//! Every section and field is optional. Command-line flags are applied on
//! top of whatever the file provides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// File looked up in the working directory when `--config` is not given
pub const CONFIG_FILE: &str = "squircle.toml";

/// Top-level configuration (squircle.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SquircleConfig {
    #[serde(default)]
    pub shape: ShapeConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Shape to outline
#[derive(Debug, Deserialize, Serialize)]
pub struct ShapeConfig {
    #[serde(default = "default_extent")]
    pub width: f64,
    #[serde(default = "default_extent")]
    pub height: f64,
    #[serde(default = "default_smoothing")]
    pub smoothing: f64,
    /// Uniform radius, overridden per corner below
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_left: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_right: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_right: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_left: Option<f64>,
}

fn default_extent() -> f64 {
    150.0
}

fn default_smoothing() -> f64 {
    0.8
}

fn default_radius() -> f64 {
    32.0
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            width: default_extent(),
            height: default_extent(),
            smoothing: default_smoothing(),
            radius: default_radius(),
            top_left: None,
            top_right: None,
            bottom_right: None,
            bottom_left: None,
        }
    }
}

/// SVG output settings
#[derive(Debug, Deserialize, Serialize)]
pub struct RenderConfig {
    /// Fill color of the outline
    #[serde(default = "default_fill")]
    pub fill: String,
    /// Empty margin around the outline
    #[serde(default = "default_padding")]
    pub padding: f64,
}

fn default_fill() -> String {
    "#3b82f6".to_string()
}

fn default_padding() -> f64 {
    8.0
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fill: default_fill(),
            padding: default_padding(),
        }
    }
}

/// Outline cache settings
#[derive(Debug, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_capacity() -> usize {
    squircle_core::DEFAULT_CAPACITY.get()
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

impl SquircleConfig {
    /// Load configuration from an explicit file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Load squircle.toml from a directory, falling back to defaults
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        if !config_path.exists() {
            debug!("No {} in {}, using defaults", CONFIG_FILE, path.display());
            return Ok(Self::default());
        }

        Self::load(&config_path)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize squircle config")
    }
}
