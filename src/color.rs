//! RGB color handling.
//!
//! Rendered symbols are fully opaque 24-bit RGB; nothing here carries an
//! alpha channel. [`Color::from_hex`] is the parse boundary for
//! user-supplied color strings, so a bad string surfaces as
//! [`SelloError::InvalidStyle`] before any rendering starts.

use std::fmt;
use std::str::FromStr;

use crate::error::SelloError;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` string. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Self, SelloError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(SelloError::InvalidStyle(format!(
                "Color must be #RRGGBB, got '{}'",
                hex
            )));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| {
                SelloError::InvalidStyle(format!("Color must be #RRGGBB, got '{}'", hex))
            })
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Format as `#RRGGBB`, the form stored in settings files.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub(crate) fn to_pixel(self) -> image::Rgb<u8> {
        image::Rgb([self.r, self.g, self.b])
    }

    pub(crate) fn to_pixel_alpha(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, 255])
    }
}

impl FromStr for Color {
    type Err = SelloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
