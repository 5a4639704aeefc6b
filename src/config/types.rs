//! Configuration type definitions.

use crate::draw::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output canvas settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 1 - 16384)
    #[serde(default = "default_width")]
    pub width: u32,

    /// Canvas height in pixels (valid range: 1 - 16384)
    #[serde(default = "default_height")]
    pub height: u32,

    /// Color painted under everything after a clear: a gray level, an
    /// `[r, g, b]` array (0-255) or a token such as `"white"` or `"#fafafa"`
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
        }
    }
}

/// Baseline paint style restored by `Renderer::clear`.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct StyleConfig {
    /// Fill and stroke color after a clear
    #[serde(default = "default_color")]
    pub color: ColorSpec,

    /// Stroke width in pixels after a clear (valid range: 0.1 - 100.0)
    #[serde(default = "default_line_width")]
    pub line_width: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            line_width: default_line_width(),
        }
    }
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    600
}

fn default_background() -> ColorSpec {
    ColorSpec::Token("white".to_string())
}

fn default_color() -> ColorSpec {
    ColorSpec::BLACK
}

fn default_line_width() -> f64 {
    1.0
}
