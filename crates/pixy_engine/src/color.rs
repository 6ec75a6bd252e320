use std::fmt::Display;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{EngineError, Result};

lazy_static::lazy_static! {
    static ref HEX_REGEX: Regex = Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})?$").unwrap();
}

/// An RGBA cell color.
///
/// Colors compare by value; the editor relies on that to tell background
/// cells from drawn ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{Color: r={:02X}, g={:02X}, b={:02X}, a={:02X}}}", self.r, self.g, self.b, self.a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::GRAY
    }
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const GRAY: Color = Color::new(142, 142, 147);
    pub const RED: Color = Color::new(255, 59, 48);
    pub const GREEN: Color = Color::new(52, 199, 89);
    pub const BLUE: Color = Color::new(0, 122, 255);
    pub const YELLOW: Color = Color::new(255, 204, 0);
    pub const CLEAR: Color = Color::rgba(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    pub fn r(&self) -> u8 {
        self.r
    }

    pub fn g(&self) -> u8 {
        self.g
    }

    pub fn b(&self) -> u8 {
        self.b
    }

    pub fn a(&self) -> u8 {
        self.a
    }

    pub fn get_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    pub fn get_rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Composite this color over an opaque base color.
    pub fn over(&self, base: Color) -> Color {
        if self.a == 255 {
            return *self;
        }
        let alpha = self.a as u32;
        let blend = |fg: u8, bg: u8| ((fg as u32 * alpha + bg as u32 * (255 - alpha)) / 255) as u8;
        Color::new(blend(self.r, base.r), blend(self.g, base.g), blend(self.b, base.b))
    }

    /// Hex notation, `#rrggbb` for opaque colors and `#rrggbbaa` otherwise.
    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Parse `#rrggbb` or `#rrggbbaa`; the leading `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || EngineError::InvalidHexColor { value: hex.to_string() };
        let cap = HEX_REGEX.captures(hex.trim()).ok_or_else(invalid)?;
        let channel = |i: usize| -> Result<u8> {
            match cap.get(i) {
                Some(m) => u8::from_str_radix(m.as_str(), 16).map_err(|_| invalid()),
                None => Ok(255),
            }
        };
        Ok(Color::rgba(channel(1)?, channel(2)?, channel(3)?, channel(4)?))
    }
}

impl TryFrom<String> for Color {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(value: Color) -> String {
        value.to_hex()
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from(value: (u8, u8, u8)) -> Self {
        Color::new(value.0, value.1, value.2)
    }
}

impl From<[u8; 4]> for Color {
    fn from(value: [u8; 4]) -> Self {
        Color::rgba(value[0], value[1], value[2], value[3])
    }
}

impl From<Color> for [u8; 4] {
    fn from(value: Color) -> [u8; 4] {
        value.get_rgba()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip() {
        assert_eq!(Color::from_hex("#ff3b30").unwrap(), Color::RED);
        assert_eq!(Color::from_hex("000000").unwrap(), Color::BLACK);
        assert_eq!(Color::WHITE.to_hex(), "#ffffff");
        assert_eq!(Color::rgba(1, 2, 3, 4).to_hex(), "#01020304");
        assert_eq!(Color::from_hex("#01020304").unwrap(), Color::rgba(1, 2, 3, 4));
    }

    #[test]
    fn test_invalid_hex() {
        assert!(matches!(Color::from_hex("#12345"), Err(EngineError::InvalidHexColor { .. })));
        assert!(Color::from_hex("red").is_err());
        assert!(Color::from_hex("").is_err());
    }

    #[test]
    fn test_equality_includes_alpha() {
        assert_ne!(Color::rgba(0, 0, 0, 255), Color::rgba(0, 0, 0, 0));
        assert_eq!(Color::new(0, 0, 0), Color::BLACK);
    }

    #[test]
    fn test_over() {
        assert_eq!(Color::RED.over(Color::WHITE), Color::RED);
        assert_eq!(Color::CLEAR.over(Color::WHITE), Color::WHITE);
        let half = Color::rgba(0, 0, 0, 128).over(Color::WHITE);
        assert_eq!(half, Color::new(127, 127, 127));
    }
}
