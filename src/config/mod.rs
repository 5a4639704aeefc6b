//! Configuration file support for easel.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/easel/config.toml`. Settings include the output canvas size,
//! the baseline paint style restored on clear, and the text font.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod types;

pub use types::{CanvasConfig, StyleConfig};

use crate::draw::{Baseline, FontDescriptor};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 1024
/// height = 768
/// background = "#fafafa"
///
/// [style]
/// color = [20, 20, 20]
/// line_width = 2.0
///
/// [font]
/// family = "Monospace"
/// weight = "bold"
/// size = 18.0
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Output canvas size and background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Baseline fill/stroke color and line width
    #[serde(default)]
    pub style: StyleConfig,

    /// Text font
    #[serde(default)]
    pub font: FontDescriptor,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width`, `canvas.height`: 1 - 16384
    /// - `style.line_width`: 0.1 - 100.0
    /// - `font.size`: 4.0 - 256.0
    fn validate_and_clamp(&mut self) {
        if !(1..=16384).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 1-16384 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(1, 16384);
        }

        if !(1..=16384).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 1-16384 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(1, 16384);
        }

        if !(0.1..=100.0).contains(&self.style.line_width) {
            log::warn!(
                "Invalid line_width {:.1}, clamping to 0.1-100.0 range",
                self.style.line_width
            );
            self.style.line_width = if self.style.line_width.is_nan() {
                1.0
            } else {
                self.style.line_width.clamp(0.1, 100.0)
            };
        }

        if !(4.0..=256.0).contains(&self.font.size) {
            log::warn!(
                "Invalid font size {:.1}, clamping to 4.0-256.0 range",
                self.font.size
            );
            self.font.size = if self.font.size.is_nan() {
                16.0
            } else {
                self.font.size.clamp(4.0, 256.0)
            };
        }

        // Validate font weight is reasonable
        let valid_weight = matches!(
            self.font.weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .font
            .weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            log::warn!(
                "Invalid font weight '{}', falling back to 'normal'",
                self.font.weight
            );
            self.font.weight = "normal".to_string();
        }

        // Validate font style
        if !matches!(
            self.font.style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            log::warn!(
                "Invalid font style '{}', falling back to 'normal'",
                self.font.style
            );
            self.font.style = "normal".to_string();
        }
    }

    /// Style restored by `Renderer::clear`.
    pub fn baseline(&self) -> Baseline {
        Baseline {
            color: self.style.color.clone(),
            line_width: self.style.line_width,
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/easel/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("easel");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        config.validate_and_clamp();
        Ok(config)
    }

    fn from_toml(config_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(config_str)
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::ColorSpec;
    use tempfile::TempDir;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.canvas.width, 800);
        assert_eq!(config.canvas.height, 600);
        assert_eq!(config.baseline(), Baseline::default());
        assert_eq!(config.font, FontDescriptor::default());
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let config = Config::from_toml(
            r#"
            [canvas]
            width = 320

            [style]
            color = [10, 20, 30]
            "#,
        )
        .unwrap();
        assert_eq!(config.canvas.width, 320);
        assert_eq!(config.canvas.height, 600);
        assert_eq!(config.style.color, ColorSpec::Rgb(10.0, 20.0, 30.0));
        assert_eq!(config.style.line_width, 1.0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::from_toml(
            r#"
            [canvas]
            width = 0
            height = 100000

            [style]
            line_width = 500.0

            [font]
            size = 1.0
            weight = "extra-chunky"
            style = "wavy"
            "#,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.canvas.width, 1);
        assert_eq!(config.canvas.height, 16384);
        assert_eq!(config.style.line_width, 100.0);
        assert_eq!(config.font.size, 4.0);
        assert_eq!(config.font.weight, "normal");
        assert_eq!(config.font.style, "normal");
    }

    #[test]
    fn numeric_font_weight_is_accepted() {
        let mut config = Config::from_toml("[font]\nweight = \"600\"").unwrap();
        config.validate_and_clamp();
        assert_eq!(config.font.weight, "600");
    }

    #[test]
    fn load_from_reads_and_validates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[style]\nline_width = 0.0\ncolor = \"#123456\"").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.style.line_width, 0.1);
        assert_eq!(config.baseline().color, ColorSpec::Token("#123456".into()));
    }

    #[test]
    fn load_from_reports_parse_errors_with_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.toml");
        fs::write(&path, "[canvas\nwidth = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err}").contains("Failed to parse config"));
    }

    #[test]
    fn schema_names_every_section() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        for section in ["canvas", "style", "font"] {
            assert!(properties.contains_key(section), "missing {section}");
        }
    }
}
