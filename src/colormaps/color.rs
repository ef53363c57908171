//! Color values carried by stops and ramps.
//!
//! Renderers accept either an `[r, g, b, a]` array or a CSS color string.
//! The engine passes both through untouched, except when resolving a ramp
//! or converting between hex and RGBA.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, SymbologyError};

/// An 8-bit RGB color with a fractional alpha in `0..=1`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "[f64; 4]")]
pub struct Rgba {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha, 0 (transparent) to 1 (opaque)
    pub a: f64,
}

impl Rgba {
    /// Fully transparent black, used for no-data pixels and fallbacks
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0.0,
    };

    /// Create a color from its channels
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Replace the alpha channel
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Whether the color is invisible
    pub fn is_transparent(&self) -> bool {
        self.a == 0.0
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (the `#` is optional, case is ignored)
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        let invalid = || SymbologyError::InvalidColor {
            value: hex.to_string(),
        };

        if !(digits.len() == 6 || digits.len() == 8)
            || !digits.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        let r = channel(0)?;
        let g = channel(2)?;
        let b = channel(4)?;
        let a = if digits.len() == 8 {
            channel(6)? as f64 / 255.0
        } else {
            1.0
        };

        Ok(Self { r, g, b, a })
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque
    pub fn to_hex(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            let alpha = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, alpha
            )
        }
    }

    /// Format as a CSS `rgba(r, g, b, a)` string
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl From<Rgba> for [f64; 4] {
    fn from(c: Rgba) -> Self {
        [c.r as f64, c.g as f64, c.b as f64, c.a]
    }
}

impl TryFrom<Vec<f64>> for Rgba {
    type Error = SymbologyError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        let invalid = || SymbologyError::InvalidColor {
            value: format!("{:?}", values),
        };

        if values.len() != 3 && values.len() != 4 {
            return Err(invalid());
        }

        let channel = |v: f64| {
            if v.is_finite() && (0.0..=255.0).contains(&v) {
                Ok(v.round() as u8)
            } else {
                Err(invalid())
            }
        };
        let a = values.get(3).copied().unwrap_or(1.0);
        if !a.is_finite() || !(0.0..=1.0).contains(&a) {
            return Err(invalid());
        }

        Ok(Self {
            r: channel(values[0])?,
            g: channel(values[1])?,
            b: channel(values[2])?,
            a,
        })
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// A stop or ramp color: numeric channels or an opaque CSS string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    /// `[r, g, b, a]` channels
    Rgba(Rgba),
    /// Hex or named CSS color, e.g. `#1f77b4` or `steelblue`
    Named(String),
}

impl Color {
    /// Fully transparent color
    pub fn transparent() -> Self {
        Color::Rgba(Rgba::TRANSPARENT)
    }

    /// Resolve to channels, parsing strings when needed
    pub fn to_rgba(&self) -> Result<Rgba> {
        match self {
            Color::Rgba(c) => Ok(*c),
            Color::Named(s) if s.trim_start().starts_with('#') => Rgba::from_hex(s),
            Color::Named(s) => {
                let parsed = s
                    .parse::<colorgrad::Color>()
                    .map_err(|_| SymbologyError::InvalidColor { value: s.clone() })?;
                let [r, g, b, _] = parsed.to_rgba8();
                Ok(Rgba::new(r, g, b, parsed.a))
            }
        }
    }

    /// Hex representation of the color
    pub fn to_hex(&self) -> Result<String> {
        Ok(self.to_rgba()?.to_hex())
    }

    /// Whether the color is known to be invisible. Unparseable strings are
    /// treated as visible.
    pub fn is_transparent(&self) -> bool {
        self.to_rgba().map(|c| c.is_transparent()).unwrap_or(false)
    }
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Color::Rgba(c)
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Color::Named(s.to_string())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgba(c) => c.fmt(f),
            Color::Named(s) => f.write_str(s),
        }
    }
}
