//! RGBA color type, predefined color constants and color specifications.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use easel::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let semi_transparent_blue = Color { r: 0.0, g: 0.0, b: 1.0, a: 0.5 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components in the 0.0 - 1.0 range.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 0-255 channel values.
    ///
    /// Values are not clamped; Cairo saturates out-of-range sources itself.
    pub fn from_rgb255(r: f64, g: f64, b: f64) -> Self {
        Self::new(r / 255.0, g / 255.0, b / 255.0, 1.0)
    }

    /// Looks up one of the predefined palette colors by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "red" => Some(RED),
            "green" => Some(GREEN),
            "blue" => Some(BLUE),
            "yellow" => Some(YELLOW),
            "orange" => Some(ORANGE),
            "pink" => Some(PINK),
            "white" => Some(WHITE),
            "black" => Some(BLACK),
            "transparent" => Some(TRANSPARENT),
            _ => None,
        }
    }

    /// Parses a CSS-style color token.
    ///
    /// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(r,g,b)`,
    /// `rgba(r,g,b,a)` (channels 0-255, alpha 0.0-1.0) and palette names.
    /// Returns `None` for anything else.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();

        if let Some(hex) = token.strip_prefix('#') {
            return parse_hex(hex);
        }

        let lower = token.to_ascii_lowercase();
        if let Some(args) = lower
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let [r, g, b, a] = parse_channels::<4>(args)?;
            return Some(Self::new(r / 255.0, g / 255.0, b / 255.0, a));
        }
        if let Some(args) = lower
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let [r, g, b] = parse_channels::<3>(args)?;
            return Some(Self::from_rgb255(r, g, b));
        }

        Self::from_name(&lower)
    }
}

fn parse_channels<const N: usize>(args: &str) -> Option<[f64; N]> {
    let mut out = [0.0; N];
    let mut parts = args.split(',');
    for slot in out.iter_mut() {
        *slot = parts.next()?.trim().parse().ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(out)
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    let [r, g, b, a] = match hex.len() {
        3 => [nibble(0)?, nibble(1)?, nibble(2)?, 255],
        4 => [nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?],
        6 => [byte(0)?, byte(2)?, byte(4)?, 255],
        8 => [byte(0)?, byte(2)?, byte(4)?, byte(6)?],
        _ => return None,
    };

    Some(Color::new(
        r as f64 / 255.0,
        g as f64 / 255.0,
        b as f64 / 255.0,
        a as f64 / 255.0,
    ))
}

/// Color argument accepted by [`Renderer::fill`](super::Renderer::fill) and
/// [`Renderer::stroke`](super::Renderer::stroke).
///
/// Numeric channels are 0-255 and are not range-checked. Tokens are handed to
/// the surface verbatim.
///
/// # Examples
/// ```toml
/// color = 0                # gray level applied to all channels
/// color = [255, 128, 0]    # explicit channels
/// color = "#336699"        # pre-formatted token
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// One value used for red, green and blue
    Gray(f64),
    /// Red, green and blue channels
    Rgb(f64, f64, f64),
    /// Pre-formatted color token such as `"#ff0000"` or `"red"`
    Token(String),
}

impl ColorSpec {
    /// The `rgb(0,0,0)` baseline restored by `Renderer::clear`.
    pub const BLACK: ColorSpec = ColorSpec::Gray(0.0);

    /// Resolves this specification to a concrete [`Color`].
    ///
    /// Returns `None` when a token is not understood.
    pub fn to_color(&self) -> Option<Color> {
        match self {
            ColorSpec::Gray(v) => Some(Color::from_rgb255(*v, *v, *v)),
            ColorSpec::Rgb(r, g, b) => Some(Color::from_rgb255(*r, *g, *b)),
            ColorSpec::Token(token) => Color::parse(token),
        }
    }
}

/// Formats numeric specs as `rgb(r,g,b)`; tokens are written unchanged.
impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorSpec::Gray(v) => write!(f, "rgb({v},{v},{v})"),
            ColorSpec::Rgb(r, g, b) => write!(f, "rgb({r},{g},{b})"),
            ColorSpec::Token(token) => f.write_str(token),
        }
    }
}

impl From<f64> for ColorSpec {
    fn from(value: f64) -> Self {
        ColorSpec::Gray(value)
    }
}

impl From<(f64, f64, f64)> for ColorSpec {
    fn from((r, g, b): (f64, f64, f64)) -> Self {
        ColorSpec::Rgb(r, g, b)
    }
}

impl From<&str> for ColorSpec {
    fn from(token: &str) -> Self {
        ColorSpec::Token(token.to_string())
    }
}

impl From<String> for ColorSpec {
    fn from(token: String) -> Self {
        ColorSpec::Token(token)
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined green color (R=0.0, G=1.0, B=0.0)
pub const GREEN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined yellow color (R=1.0, G=1.0, B=0.0)
pub const YELLOW: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined orange color (R=1.0, G=0.5, B=0.0)
pub const ORANGE: Color = Color {
    r: 1.0,
    g: 0.5,
    b: 0.0,
    a: 1.0,
};

/// Predefined pink/magenta color (R=1.0, G=0.0, B=1.0)
pub const PINK: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined white color (R=1.0, G=1.0, B=1.0)
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined black color (R=0.0, G=0.0, B=0.0)
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Fully transparent color
pub const TRANSPARENT: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_specs_format_as_rgb() {
        assert_eq!(ColorSpec::Gray(5.0).to_string(), "rgb(5,5,5)");
        assert_eq!(ColorSpec::Rgb(1.0, 2.0, 3.0).to_string(), "rgb(1,2,3)");
        assert_eq!(ColorSpec::Rgb(0.5, 2.0, 3.0).to_string(), "rgb(0.5,2,3)");
    }

    #[test]
    fn tokens_pass_through_verbatim() {
        let spec = ColorSpec::from("not-a-color");
        assert_eq!(spec.to_string(), "not-a-color");
        assert_eq!(spec.to_color(), None);
    }

    #[test]
    fn parse_accepts_hex_forms() {
        assert_eq!(Color::parse("#f00"), Some(RED));
        assert_eq!(Color::parse("#00ff00"), Some(GREEN));
        assert_eq!(Color::parse("#0000ff80").map(|c| c.b), Some(1.0));
        assert_eq!(Color::parse("#0000"), Some(TRANSPARENT));
        assert_eq!(Color::parse("#12345"), None);
        assert_eq!(Color::parse("#zzz"), None);
    }

    #[test]
    fn parse_accepts_functional_forms_and_names() {
        assert_eq!(Color::parse("rgb(255, 0, 255)"), Some(PINK));
        assert_eq!(Color::parse("RGBA(0,0,0,0)"), Some(TRANSPARENT));
        assert_eq!(Color::parse("White"), Some(WHITE));
        assert_eq!(Color::parse("rgb(1,2)"), None);
        assert_eq!(Color::parse("rgb(1,2,3,4)"), None);
        assert_eq!(Color::parse("chartreuse"), None);
    }

    #[test]
    fn formatted_numeric_spec_parses_back_to_same_color() {
        let spec = ColorSpec::Rgb(255.0, 128.0, 0.0);
        assert_eq!(Color::parse(&spec.to_string()), spec.to_color());
    }

    #[test]
    fn config_values_deserialize_into_each_variant() {
        #[derive(Deserialize)]
        struct Wrapper {
            color: ColorSpec,
        }

        let gray: Wrapper = toml::from_str("color = 12.0").unwrap();
        assert_eq!(gray.color, ColorSpec::Gray(12.0));
        let rgb: Wrapper = toml::from_str("color = [1.0, 2.0, 3.0]").unwrap();
        assert_eq!(rgb.color, ColorSpec::Rgb(1.0, 2.0, 3.0));
        let token: Wrapper = toml::from_str("color = \"#fff\"").unwrap();
        assert_eq!(token.color, ColorSpec::Token("#fff".to_string()));
    }
}
