//! Font descriptor for text rendering.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Font configuration for [`Renderer::font`](super::Renderer::font).
///
/// Describes which font to use, including family name, weight, style and
/// size, and converts it to the Pango description string the Cairo surface
/// expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "Monospace", "JetBrains Mono")
    /// Reference installed system fonts by name
    #[serde(default = "default_family")]
    pub family: String,

    /// Font weight (e.g., "normal", "bold", "light" or numeric 100-900)
    #[serde(default = "default_weight")]
    pub weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_style")]
    pub style: String,

    /// Font size in points (valid range: 4.0 - 256.0)
    #[serde(default = "default_size")]
    pub size: f64,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: default_family(),
            weight: default_weight(),
            style: default_style(),
            size: default_size(),
        }
    }
}

impl FontDescriptor {
    pub fn new(family: String, weight: String, style: String, size: f64) -> Self {
        Self {
            family,
            weight,
            style,
            size,
        }
    }

    /// Converts this font descriptor to a Pango font description string.
    ///
    /// Format: "Family Style Weight Size"
    /// Example: "Sans Bold 32" or "Monospace Italic 24"
    pub fn to_pango_string(&self) -> String {
        let mut parts = vec![self.family.clone()];

        if self.style.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.style));
        }

        if self.weight.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.weight));
        }

        parts.push(format!("{}", self.size.round() as i32));

        parts.join(" ")
    }
}

fn default_family() -> String {
    "Sans".to_string()
}

fn default_weight() -> String {
    "normal".to_string()
}

fn default_style() -> String {
    "normal".to_string()
}

fn default_size() -> f64 {
    16.0
}

/// Capitalizes the first letter of a string.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pango_string_default() {
        let font = FontDescriptor::default();
        assert_eq!(font.to_pango_string(), "Sans 16");
    }

    #[test]
    fn test_pango_string_italic_bold() {
        let font = FontDescriptor::new(
            "Monospace".to_string(),
            "bold".to_string(),
            "italic".to_string(),
            23.6,
        );
        assert_eq!(font.to_pango_string(), "Monospace Italic Bold 24");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let font: FontDescriptor = toml::from_str("family = \"Serif\"").unwrap();
        assert_eq!(font.to_pango_string(), "Serif 16");
    }
}
