//! Hue and Saturation color representation.

use serde::{Deserialize, Serialize};

use super::Color;
use crate::errors::Error;

/// Hue and Saturation color representation.
///
/// - Hue: the color angle on the color wheel (0-360 degrees)
/// - Saturation: the intensity of the color (0-100 percent)
///
/// This is the color mode the Ambilight light view reports. Serializes as a
/// `[hue, saturation]` pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f64; 2]", try_from = "[f64; 2]")]
pub struct HueSaturation {
    hue: f64,
    saturation: f64,
}

impl HueSaturation {
    /// Create a new HueSaturation with the given values.
    ///
    /// Returns `None` if values are outside valid ranges.
    ///
    /// # Examples
    ///
    /// ```
    /// use ambilight_rs::HueSaturation;
    ///
    /// assert!(HueSaturation::create(0.0, 100.0).is_some());
    /// assert!(HueSaturation::create(120.5, 50.0).is_some());
    /// assert!(HueSaturation::create(361.0, 50.0).is_none());
    /// assert!(HueSaturation::create(180.0, 100.1).is_none());
    /// ```
    pub fn create(hue: f64, saturation: f64) -> Option<Self> {
        if (0.0..=360.0).contains(&hue) && (0.0..=100.0).contains(&saturation) {
            Some(HueSaturation { hue, saturation })
        } else {
            None
        }
    }

    /// Get the hue value.
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Get the saturation value.
    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    /// Convert an RGB color to hue/saturation.
    ///
    /// Hue is scaled to 0-360 and saturation to 0-100, each rounded to three
    /// decimals. Gray (including black) has hue and saturation 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use ambilight_rs::{Color, HueSaturation};
    ///
    /// let hs = HueSaturation::from_color(&Color::rgb(0, 0, 255));
    /// assert_eq!(hs.hue(), 240.0);
    /// assert_eq!(hs.saturation(), 100.0);
    /// ```
    pub fn from_color(color: &Color) -> Self {
        let (h, s) = rgb_to_hs(
            color.red as f64 / 255.0,
            color.green as f64 / 255.0,
            color.blue as f64 / 255.0,
        );
        HueSaturation {
            hue: round(h * 360.0, 3),
            saturation: round(s * 100.0, 3),
        }
    }

    /// Both components rounded to one decimal place.
    ///
    /// Rounding is decided on the exact stored value, with exact ties going
    /// to the even digit: `221.25` becomes `221.2`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ambilight_rs::{Color, HueSaturation};
    ///
    /// let hs = HueSaturation::from_color(&Color::rgb(0, 35, 112));
    /// assert_eq!(hs.hue(), 221.25);
    /// assert_eq!(hs.rounded().hue(), 221.2);
    /// ```
    pub fn rounded(&self) -> Self {
        HueSaturation {
            hue: round(self.hue, 1),
            saturation: round(self.saturation, 1),
        }
    }
}

impl From<HueSaturation> for [f64; 2] {
    fn from(hs: HueSaturation) -> Self {
        [hs.hue, hs.saturation]
    }
}

impl TryFrom<[f64; 2]> for HueSaturation {
    type Error = Error;

    fn try_from([hue, saturation]: [f64; 2]) -> Result<Self, Error> {
        HueSaturation::create(hue, saturation)
            .ok_or_else(|| Error::invalid_hue_saturation(hue, saturation))
    }
}

// Hue and saturation of an HSV conversion, all components in 0-1.
fn rgb_to_hs(r: f64, g: f64, b: f64) -> (f64, f64) {
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    if minc == maxc {
        return (0.0, 0.0);
    }

    let rangec = maxc - minc;
    let s = rangec / maxc;
    let rc = (maxc - r) / rangec;
    let gc = (maxc - g) / rangec;
    let bc = (maxc - b) / rangec;
    let h = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    ((h / 6.0).rem_euclid(1.0), s)
}

// Decimal rounding of the exact binary value, ties to even. Scaling by a
// power of ten first would turn values like 216.35 (stored just below the
// tie) into exact ties.
fn round(x: f64, decimals: usize) -> f64 {
    format!("{x:.decimals$}").parse().unwrap_or(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(r: u8, g: u8, b: u8) -> (f64, f64) {
        let hs = HueSaturation::from_color(&Color::rgb(r, g, b)).rounded();
        (hs.hue(), hs.saturation())
    }

    #[test]
    fn test_primaries() {
        let red = HueSaturation::from_color(&Color::rgb(255, 0, 0));
        assert_eq!((red.hue(), red.saturation()), (0.0, 100.0));

        let green = HueSaturation::from_color(&Color::rgb(0, 255, 0));
        assert_eq!((green.hue(), green.saturation()), (120.0, 100.0));
    }

    #[test]
    fn test_gray_and_black_have_no_hue() {
        for color in [Color::rgb(0, 0, 0), Color::rgb(128, 128, 128)] {
            let hs = HueSaturation::from_color(&color);
            assert_eq!((hs.hue(), hs.saturation()), (0.0, 0.0));
        }
    }

    #[test]
    fn test_half_saturation() {
        assert_eq!(view(255, 0, 255).0, 300.0);
        assert_eq!(view(100, 50, 50), (0.0, 50.0));
    }

    #[test]
    fn test_rounded_one_decimal() {
        let hs = HueSaturation::create(12.345, 67.891).unwrap().rounded();
        assert_eq!((hs.hue(), hs.saturation()), (12.3, 67.9));
    }

    #[test]
    fn test_exact_ties_round_to_even() {
        assert_eq!(HueSaturation::from_color(&Color::rgb(0, 80, 7)).hue(), 125.25);
        assert_eq!(view(0, 35, 112), (221.2, 100.0));
        assert_eq!(view(0, 80, 7), (125.2, 100.0));
    }

    #[test]
    fn test_near_ties_round_by_stored_value() {
        // 216.35 and 234.05 are stored just off the decimal tie.
        assert_eq!(view(3, 57, 140), (216.3, 97.9));
        assert_eq!(view(3, 27, 245), (234.1, 98.8));
        assert_eq!(view(6, 114, 5), (119.5, 95.6));
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<HueSaturation>("[400.0, 10.0]").is_err());
        let hs: HueSaturation = serde_json::from_str("[30.0, 40.0]").unwrap();
        assert_eq!((hs.hue(), hs.saturation()), (30.0, 40.0));
    }
}
