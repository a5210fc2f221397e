//! Color representation

use crate::error::{Error, Result};
use serde::{Serialize, Serializer};
use std::fmt;

/// An RGB color
///
/// Serializes as the renderer's 6-digit uppercase hex form (e.g. "FF0000").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    /// Create a color from RGB components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string, with or without a leading '#'
    ///
    /// # Examples
    /// ```
    /// use quill_sheets_core::Color;
    ///
    /// assert_eq!(Color::from_hex("FF0000").unwrap(), Color::RED);
    /// assert_eq!(Color::from_hex("#ff0000").unwrap(), Color::RED);
    /// assert!(Color::from_hex("red").is_err());
    /// ```
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::other(format!("invalid hex color: '{}'", s)));
        }
        let parse = |range| u8::from_str_radix(&hex[range], 16).unwrap_or(0);
        Ok(Self {
            r: parse(0..2),
            g: parse(2..4),
            b: parse(4..6),
        })
    }

    /// Format as a 6-digit uppercase hex string (no '#')
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hex_roundtrip() {
        let c = Color::from_hex("375623").unwrap();
        assert_eq!(c.to_hex(), "375623");
        assert_eq!(Color::from_hex("#5E03FC").unwrap().to_hex(), "5E03FC");
    }

    #[test]
    fn test_invalid_hex() {
        assert!(Color::from_hex("").is_err());
        assert!(Color::from_hex("FFF").is_err());
        assert!(Color::from_hex("GG0000").is_err());
        assert!(Color::from_hex("FF00001").is_err());
    }
}
