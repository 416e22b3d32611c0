use raylib::prelude::Color;
use crate::error::{Result, SlideshowError};

/// An opaque color parsed from a `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn parse_hex(value: &str) -> Result<Self> {
        let invalid = || SlideshowError::InvalidColor(value.to_string());

        let digits = value.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::new(rgb.r, rgb.g, rgb.b, 255)
    }
}
