use std::fmt;
use std::str::FromStr;

use swatch_grammar::ast::ColorValue;
use swatch_grammar::{SyntaxError, parse_color};

/// Straight-alpha sRGB color as stored on a gradient stop.
///
/// Invariant:
/// - `r`, `g`, `b` are bytes (`0`–`255`).
/// - `a` is in `[0, 1]`.
///
/// Every color that enters the model is normalized to this form, so
/// interpolation and serialization never have to deal with hex or names.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn opaque_white() -> Self {
        Self::new(255, 255, 255, 1.0)
    }

    #[inline]
    pub const fn transparent_white() -> Self {
        Self::new(255, 255, 255, 0.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0, 0, 0, 1.0)
    }

    /// Builds a color from unbounded channel values.
    ///
    /// RGB is rounded to the nearest integer and clamped to `0..=255`, alpha
    /// is clamped to `[0, 1]`. Non-finite values become `0`.
    pub fn from_channels(r: f32, g: f32, b: f32, a: f32) -> Self {
        fn byte(v: f32) -> u8 {
            if v.is_finite() { v.round().clamp(0.0, 255.0) as u8 } else { 0 }
        }
        let a = if a.is_finite() { a.clamp(0.0, 1.0) } else { 0.0 };
        Self { r: byte(r), g: byte(g), b: byte(b), a }
    }

    /// Per-channel linear interpolation; `t = 0` is `self`, `t = 1` is `other`.
    ///
    /// `t` is not clamped, but the result always is.
    pub fn lerp(self, other: Rgba, t: f32) -> Self {
        let mix = |from: f32, to: f32| from + (to - from) * t;
        Self::from_channels(
            mix(self.r as f32, other.r as f32),
            mix(self.g as f32, other.g as f32),
            mix(self.b as f32, other.b as f32),
            mix(self.a, other.a),
        )
    }

    /// Normalizes a parsed color value.
    pub fn from_value(value: &ColorValue) -> Result<Self, ColorError> {
        match value {
            ColorValue::Hex(digits) => Self::from_hex(digits),
            ColorValue::Rgb(channels) | ColorValue::Rgba(channels) => match channels.as_slice() {
                [r, g, b] => Ok(Self::from_channels(*r, *g, *b, 1.0)),
                [r, g, b, a] => Ok(Self::from_channels(*r, *g, *b, *a)),
                other => Err(ColorError::Arity(other.len())),
            },
            ColorValue::Literal(name) => {
                Self::from_name(name).ok_or_else(|| ColorError::UnknownName(name.clone()))
            }
        }
    }

    /// `rgb`, `rgba`, `rrggbb` or `rrggbbaa` hex digits, without the `#`.
    ///
    /// Alpha bytes are converted to a fraction rounded to two decimals.
    pub fn from_hex(digits: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidHex(digits.to_string());
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let expanded: String = match digits.len() {
            3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => digits.to_string(),
            _ => return Err(invalid()),
        };
        let byte = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| invalid());
        let alpha = if expanded.len() == 8 {
            (byte(6)? as f32 / 255.0 * 100.0).round() / 100.0
        } else {
            1.0
        };
        Ok(Self::new(byte(0)?, byte(2)?, byte(4)?, alpha))
    }

    /// Basic CSS named colors and `transparent`, case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        let rgb = |r, g, b| Some(Self::new(r, g, b, 1.0));
        match name.to_ascii_lowercase().as_str() {
            "transparent" => Some(Self::new(0, 0, 0, 0.0)),
            "black" => rgb(0, 0, 0),
            "white" => rgb(255, 255, 255),
            "red" => rgb(255, 0, 0),
            "green" => rgb(0, 128, 0),
            "lime" => rgb(0, 255, 0),
            "blue" => rgb(0, 0, 255),
            "yellow" => rgb(255, 255, 0),
            "cyan" | "aqua" => rgb(0, 255, 255),
            "magenta" | "fuchsia" => rgb(255, 0, 255),
            "gray" | "grey" => rgb(128, 128, 128),
            "silver" => rgb(192, 192, 192),
            "maroon" => rgb(128, 0, 0),
            "olive" => rgb(128, 128, 0),
            "teal" => rgb(0, 128, 128),
            "navy" => rgb(0, 0, 128),
            "purple" => rgb(128, 0, 128),
            "orange" => rgb(255, 165, 0),
            _ => None,
        }
    }

    /// Parses any color text a picker may deliver (hex, `rgb()`, `rgba()`,
    /// named color).
    pub fn parse(text: &str) -> Result<Self, ColorError> {
        let value = parse_color(text).map_err(ColorError::Syntax)?;
        Self::from_value(&value)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::opaque_white()
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Canonical `rgba(r,g,b,a)` form used in serialized gradients.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

// ── ColorError ────────────────────────────────────────────────────────────

/// A color value that cannot be normalized to [`Rgba`].
#[derive(Debug, Clone, PartialEq)]
pub enum ColorError {
    Syntax(SyntaxError),
    InvalidHex(String),
    /// `rgb()`/`rgba()` with a channel count other than 3 or 4.
    Arity(usize),
    UnknownName(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::Syntax(e) => write!(f, "invalid color: {e}"),
            ColorError::InvalidHex(d) => write!(f, "invalid hex color #{d}"),
            ColorError::Arity(n) => write!(f, "expected 3 or 4 color channels, got {n}"),
            ColorError::UnknownName(n) => write!(f, "unknown color name {n:?}"),
        }
    }
}

impl std::error::Error for ColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ColorError::Syntax(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_canonical_rgba() {
        assert_eq!(Rgba::new(250, 84, 28, 1.0).to_string(), "rgba(250,84,28,1)");
        assert_eq!(Rgba::new(255, 255, 255, 0.0).to_string(), "rgba(255,255,255,0)");
        assert_eq!(Rgba::new(1, 2, 3, 0.5).to_string(), "rgba(1,2,3,0.5)");
    }

    #[test]
    fn hex_forms() {
        assert_eq!(Rgba::parse("#fff").unwrap(), Rgba::opaque_white());
        assert_eq!(Rgba::parse("#ff000080").unwrap(), Rgba::new(255, 0, 0, 0.5));
        assert_eq!(Rgba::parse("#00ff00").unwrap(), Rgba::new(0, 255, 0, 1.0));
        assert_eq!(Rgba::parse("#0000").unwrap(), Rgba::new(0, 0, 0, 0.0));
        assert!(matches!(Rgba::parse("#12345"), Err(ColorError::InvalidHex(_))));
    }

    #[test]
    fn rgb_gets_opaque_alpha() {
        assert_eq!(Rgba::parse("rgb(10, 20, 30)").unwrap(), Rgba::new(10, 20, 30, 1.0));
        assert_eq!(Rgba::parse("rgba(10,20,30,0.25)").unwrap(), Rgba::new(10, 20, 30, 0.25));
    }

    #[test]
    fn out_of_range_channels_are_clamped() {
        assert_eq!(Rgba::parse("rgba(300,0,12.6,7)").unwrap(), Rgba::new(255, 0, 13, 1.0));
    }

    #[test]
    fn wrong_arity_is_rejected() {
        assert_eq!(Rgba::parse("rgb(1,2)"), Err(ColorError::Arity(2)));
    }

    #[test]
    fn names() {
        assert_eq!(Rgba::parse("Red").unwrap(), Rgba::new(255, 0, 0, 1.0));
        assert_eq!(Rgba::parse("transparent").unwrap().a, 0.0);
        assert!(matches!(Rgba::parse("blurple"), Err(ColorError::UnknownName(_))));
    }

    #[test]
    fn garbage_is_a_syntax_error() {
        assert!(matches!(Rgba::parse("rgb(1,2,3"), Err(ColorError::Syntax(_))));
    }

    #[test]
    fn lerp_midpoint() {
        let mid = Rgba::opaque_white().lerp(Rgba::black(), 0.5);
        assert_eq!(mid, Rgba::new(128, 128, 128, 1.0));
    }

    #[test]
    fn lerp_clamps_extrapolation() {
        let c = Rgba::new(200, 0, 0, 1.0).lerp(Rgba::new(250, 0, 0, 1.0), 3.0);
        assert_eq!(c.r, 255);
    }
}
