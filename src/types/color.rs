//! RGB color representation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// An RGB color with red, green, and blue components (0-255 each).
///
/// Serializes as a `[r, g, b]` list, which is the form the sensor and light
/// attributes expose.
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
    pub(crate) red: u8,
    pub(crate) green: u8,
    pub(crate) blue: u8,
}

impl Color {
    /// Create a color with the given RGB values.
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create a default color (black: 0,0,0).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// The channels as a `[r, g, b]` array.
    pub fn channels(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Lowercase, zero-padded `#rrggbb` form.
    ///
    /// # Examples
    ///
    /// ```
    /// use ambilight_rs::Color;
    ///
    /// assert_eq!(Color::rgb(255, 8, 0).to_hex(), "#ff0800");
    /// assert_eq!(Color::new().to_hex(), "#000000");
    /// ```
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    fn from_hex(hex: &str) -> Option<Self> {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    fn from_csv(s: &str) -> Option<Self> {
        let parts = s
            .split(',')
            .map(|c| c.trim().parse::<u8>().ok())
            .collect::<Option<Vec<u8>>>()?;
        match parts[..] {
            [r, g, b] => Some(Self::rgb(r, g, b)),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parse from a comma-separated string (e.g., "255,128,0") or a hex
    /// string (e.g., "#ff8000").
    fn from_str(s: &str) -> Result<Self, Error> {
        let s = s.trim();
        let parsed = match s.strip_prefix('#') {
            Some(hex) => Self::from_hex(hex),
            None => Self::from_csv(s),
        };
        parsed.ok_or_else(|| Error::InvalidColorString(s.to_string()))
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::rgb(red, green, blue)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        color.channels()
    }
}
