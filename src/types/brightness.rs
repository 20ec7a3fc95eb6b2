//! Brightness of the Ambilight.

use serde::{Deserialize, Serialize};

/// Light brightness on the 0-255 scale.
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(transparent)]
pub struct Brightness {
    pub(crate) value: u8,
}

impl Brightness {
    const MAX: u8 = 255;

    /// Full brightness.
    pub fn new() -> Self {
        Brightness { value: Self::MAX }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn create(value: u8) -> Self {
        Brightness { value }
    }

    /// Scale a 0-100 percentage onto 0-255.
    ///
    /// Returns None if the percentage exceeds 100.
    ///
    /// # Examples
    ///
    /// ```
    /// use ambilight_rs::Brightness;
    ///
    /// assert_eq!(Brightness::from_percent(100).unwrap().value(), 255);
    /// assert_eq!(Brightness::from_percent(50).unwrap().value(), 128);
    /// assert!(Brightness::from_percent(101).is_none());
    /// ```
    pub fn from_percent(percent: u8) -> Option<Self> {
        if percent > 100 {
            return None;
        }
        let value = (percent as f32 * Self::MAX as f32 / 100.0).round() as u8;
        Some(Brightness { value })
    }

    /// Brightness as a rounded 0-100 percentage.
    pub fn percent(&self) -> u8 {
        (self.value as f32 * 100.0 / Self::MAX as f32).round() as u8
    }
}
