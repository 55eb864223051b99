//! Colour palette for statlab charts
//!
//! Charts draw from a small named palette instead of a global colour table.
//! The default is the university palette the course material uses:
//! - primary (`#00543C`, green): theoretical PMF markers and stems
//! - accent (`#FDBB30`, yellow): empirical bars
//! - neutral (`#75787B`, gray): axis tick labels
//!
//! Colours serialize as `#RRGGBB` strings, so a palette can live in a config
//! file as-is.

use serde::{Deserialize, Serialize};

use crate::error::{VizError, VizResult};

/// A color in RGBA format (0.0 to 1.0)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a color from RGB (alpha = 1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from hex string (e.g., "#00543C" or "00543C")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&digits[0..2], 16).ok()? as f32 / 255.0;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()? as f32 / 255.0;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()? as f32 / 255.0;

        Some(Self::rgb(r, g, b))
    }

    /// Parse a hex string, reporting the offending value on failure
    pub fn parse(hex: &str) -> VizResult<Self> {
        Self::from_hex(hex).ok_or_else(|| VizError::InvalidColor {
            value: hex.to_string(),
        })
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            channel_byte(self.r),
            channel_byte(self.g),
            channel_byte(self.b)
        )
    }
}

fn channel_byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl TryFrom<String> for Color {
    type Error = VizError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Named colours used by the chart builders
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Theoretical PMF markers, stems and hover background
    pub primary: Color,
    /// Empirical bars and hover background
    pub accent: Color,
    /// Axis tick labels
    pub neutral: Color,
}

impl Palette {
    /// Build a palette from three hex strings
    pub fn from_hex(primary: &str, accent: &str, neutral: &str) -> VizResult<Self> {
        Ok(Self {
            primary: Color::parse(primary)?,
            accent: Color::parse(accent)?,
            neutral: Color::parse(neutral)?,
        })
    }

    /// The USF green / yellow / gray palette
    pub fn usf() -> Self {
        Self {
            primary: Color::rgb(0.0, 84.0 / 255.0, 60.0 / 255.0),
            accent: Color::rgb(253.0 / 255.0, 187.0 / 255.0, 48.0 / 255.0),
            neutral: Color::rgb(117.0 / 255.0, 120.0 / 255.0, 123.0 / 255.0),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::usf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        let color = Color::from_hex("#FDBB30").unwrap();
        assert!((color.r - 0.992).abs() < 0.01);
        assert!((color.g - 0.733).abs() < 0.01);
        assert!((color.b - 0.188).abs() < 0.01);
    }

    #[test]
    fn test_color_from_hex_rejects_garbage() {
        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("#GG0000").is_none());
        assert!(Color::parse("green").is_err());
    }

    #[test]
    fn test_hex_round_trip() {
        for hex in ["#00543C", "#FDBB30", "#75787B", "#000000", "#FFFFFF"] {
            assert_eq!(Color::from_hex(hex).unwrap().to_hex(), hex);
        }
    }

    #[test]
    fn test_usf_palette() {
        let palette = Palette::default();
        assert_eq!(palette.primary.to_hex(), "#00543C");
        assert_eq!(palette.accent.to_hex(), "#FDBB30");
        assert_eq!(palette.neutral.to_hex(), "#75787B");
    }

    #[test]
    fn test_palette_serializes_as_hex() {
        let json = serde_json::to_string(&Palette::usf()).unwrap();
        assert_eq!(
            json,
            r##"{"primary":"#00543C","accent":"#FDBB30","neutral":"#75787B"}"##
        );

        let parsed: Palette = serde_json::from_str(r##"{"accent":"#112233"}"##).unwrap();
        assert_eq!(parsed.accent.to_hex(), "#112233");
        assert_eq!(parsed.primary, Palette::usf().primary);
    }

    #[test]
    fn test_palette_rejects_bad_hex() {
        assert!(serde_json::from_str::<Palette>(r#"{"primary":"nope"}"#).is_err());
        assert!(Palette::from_hex("#000000", "#xyz", "#000000").is_err());
    }
}
