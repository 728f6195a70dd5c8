//! Color values with a canonical hex form.
//!
//! A [`Color`] is an opaque sRGB triplet. Its only textual form is the
//! lowercase `#rrggbb` string, which is what every token in a theme document
//! carries. Parsing is deliberately strict:
//!
//! - Exactly six hex digits, with or without a leading `#`
//! - Upper- or lowercase digits are accepted, output is always lowercase
//! - Three-digit shorthand (`#fff`) is rejected
//!
//! # Interpolation
//!
//! [`Color::mix`] blends two colors channel by channel in sRGB space. The
//! ramp generator builds every shade from it via [`Color::lighten`] (toward
//! white) and [`Color::darken`] (toward black). Each channel is rounded to the
//! nearest integer, so mixing is monotonic in `t`: a larger fraction never
//! yields a channel further from the target.
//!
//! # Example
//!
//! ```rust
//! use shadecraft::Color;
//!
//! let teal = Color::from_hex("#042F2E").unwrap();
//! assert_eq!(teal.to_hex(), "#042f2e");
//!
//! let half = Color::mix(Color::BLACK, Color::WHITE, 0.5);
//! assert_eq!(half.to_hex(), "#808080");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorError;

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Pure white, `#ffffff`.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Pure black, `#000000`.
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Creates a color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Red channel.
    pub const fn r(&self) -> u8 {
        self.r
    }

    /// Green channel.
    pub const fn g(&self) -> u8 {
        self.g
    }

    /// Blue channel.
    pub const fn b(&self) -> u8 {
        self.b
    }

    /// Parses a strict 6-digit hex color, with or without a leading `#`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] for anything else, including
    /// 3-digit shorthand and surrounding whitespace.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidFormat {
            value: input.to_string(),
        };

        let hex = input.strip_prefix('#').unwrap_or(input);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };
        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Canonical lowercase `#rrggbb` form.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear per-channel interpolation from `a` (at `t = 0`) to `b` (at `t = 1`).
    ///
    /// `t` is clamped to `[0, 1]`; each channel is rounded to the nearest integer.
    pub fn mix(a: Color, b: Color, t: f64) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        Color::rgb(
            lerp_channel(a.r, b.r, t),
            lerp_channel(a.g, b.g, t),
            lerp_channel(a.b, b.b, t),
        )
    }

    /// Mixes toward white by `amount`.
    pub fn lighten(&self, amount: f64) -> Color {
        Color::mix(*self, Color::WHITE, amount)
    }

    /// Mixes toward black by `amount`.
    pub fn darken(&self, amount: f64) -> Color {
        Color::mix(*self, Color::BLACK, amount)
    }

    /// Sum of the three channels (0–765); lower is darker.
    pub fn channel_sum(&self) -> u16 {
        u16::from(self.r) + u16::from(self.g) + u16::from(self.b)
    }
}

fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    let a = f64::from(a);
    let b = f64::from(b);
    (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Color::from_hex(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Parsing
    // =========================================================================

    #[test]
    fn test_parse_with_and_without_hash() {
        assert_eq!(Color::from_hex("#ff6b35").unwrap(), Color::rgb(255, 107, 53));
        assert_eq!(Color::from_hex("ff6b35").unwrap(), Color::rgb(255, 107, 53));
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(
            Color::from_hex("#FDA4AF").unwrap(),
            Color::from_hex("#fda4af").unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_shorthand() {
        assert!(matches!(
            Color::from_hex("#fff"),
            Err(ColorError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["", "#", "#12345", "#1234567", "#gg0000", "# 12345", " #123456", "##123456"] {
            assert!(Color::from_hex(input).is_err(), "accepted {:?}", input);
        }
    }

    #[test]
    fn test_parse_rejects_multibyte_input_of_six_bytes() {
        // Six bytes, but not six ASCII digits.
        assert!(Color::from_hex("ééé").is_err());
    }

    #[test]
    fn test_error_carries_offending_value() {
        let err = Color::from_hex("teal").unwrap_err();
        assert_eq!(
            err,
            ColorError::InvalidFormat {
                value: "teal".to_string()
            }
        );
    }

    // =========================================================================
    // Serialization
    // =========================================================================

    #[test]
    fn test_to_hex_is_lowercase_and_padded() {
        assert_eq!(Color::rgb(4, 47, 46).to_hex(), "#042f2e");
        assert_eq!(Color::BLACK.to_hex(), "#000000");
        assert_eq!(Color::WHITE.to_string(), "#ffffff");
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let json = serde_json::to_string(&Color::rgb(255, 0, 128)).unwrap();
        assert_eq!(json, "\"#ff0080\"");
        let back: Color = serde_json::from_str("\"#FF0080\"").unwrap();
        assert_eq!(back, Color::rgb(255, 0, 128));
        assert!(serde_json::from_str::<Color>("\"#f08\"").is_err());
    }

    // =========================================================================
    // Interpolation
    // =========================================================================

    #[test]
    fn test_mix_endpoints() {
        let a = Color::rgb(10, 20, 30);
        let b = Color::rgb(200, 100, 0);
        assert_eq!(Color::mix(a, b, 0.0), a);
        assert_eq!(Color::mix(a, b, 1.0), b);
    }

    #[test]
    fn test_mix_rounds_to_nearest() {
        // 0 + 255 * 0.5 = 127.5 -> 128
        assert_eq!(Color::mix(Color::BLACK, Color::WHITE, 0.5), Color::rgb(128, 128, 128));
        // 10 + (11 - 10) * 0.4 = 10.4 -> 10
        assert_eq!(
            Color::mix(Color::rgb(10, 10, 10), Color::rgb(11, 11, 11), 0.4),
            Color::rgb(10, 10, 10)
        );
    }

    #[test]
    fn test_mix_clamps_fraction() {
        let a = Color::rgb(100, 100, 100);
        assert_eq!(Color::mix(a, Color::WHITE, 2.0), Color::WHITE);
        assert_eq!(Color::mix(a, Color::WHITE, -1.0), a);
        assert_eq!(Color::mix(a, Color::WHITE, f64::NAN), a);
    }

    #[test]
    fn test_lighten_and_darken() {
        let base = Color::rgb(100, 100, 100);
        assert_eq!(base.lighten(0.5), Color::rgb(178, 178, 178));
        assert_eq!(base.darken(0.5), Color::rgb(50, 50, 50));
        assert!(base.lighten(0.1).channel_sum() > base.channel_sum());
        assert!(base.darken(0.1).channel_sum() < base.channel_sum());
    }
}
