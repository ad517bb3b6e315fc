//! Color types and utilities

use serde::{Deserialize, Serialize};

use crate::error::{PaintError, Result};

/// RGBA color with f32 components (0.0 to 1.0)
///
/// In configuration files a color is either a `"#RRGGBB"` / `"#RRGGBBAA"`
/// string or a `{ r, g, b, a }` table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const PRIMARY: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const SECONDARY: Color = Color::rgba(0.24, 0.24, 0.26, 0.6);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create from hex value (0xRRGGBB)
    /// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
    pub fn from_hex_str(s: &str) -> Result<Self> {
        let digits = s.trim().trim_start_matches('#');
        let invalid = || PaintError::InvalidHex(s.to_string());
        if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
            return Err(invalid());
        }
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        let alpha = if digits.len() == 8 { byte(6)? } else { 255 };
        Ok(Self::from_rgba8(byte(0)?, byte(2)?, byte(4)?, alpha))
    }

    /// Bit patterns of the components, usable as a hash key.
    pub fn to_bits(&self) -> [u32; 4] {
        [
            self.r.to_bits(),
            self.g.to_bits(),
            self.b.to_bits(),
            self.a.to_bits(),
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Hex(String),
    Rgba {
        r: f32,
        g: f32,
        b: f32,
        #[serde(default = "opaque")]
        a: f32,
    },
}

fn opaque() -> f32 {
    1.0
}

impl TryFrom<ColorRepr> for Color {
    type Error = PaintError;

    fn try_from(repr: ColorRepr) -> Result<Self> {
        match repr {
            ColorRepr::Hex(s) => Color::from_hex_str(&s),
            ColorRepr::Rgba { r, g, b, a } => Ok(Color::rgba(r, g, b, a)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_string_with_and_without_alpha() {
        assert_eq!(Color::from_hex_str("#ff0000").unwrap(), Color::RED);
        let c = Color::from_hex_str("00ff0080").unwrap();
        assert_eq!(c.g, 1.0);
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert_eq!(
            Color::from_hex_str("#fff"),
            Err(PaintError::InvalidHex("#fff".to_string()))
        );
        assert!(Color::from_hex_str("#gg0000").is_err());
    }

    #[test]
    fn deserializes_from_string_or_table() {
        #[derive(Deserialize)]
        struct Doc {
            a: Color,
            b: Color,
        }
        let doc: Doc = toml::from_str("a = \"#0000ff\"\nb = { r = 1.0, g = 1.0, b = 1.0 }").unwrap();
        assert_eq!(doc.a, Color::BLUE);
        assert_eq!(doc.b, Color::WHITE);
    }
}
