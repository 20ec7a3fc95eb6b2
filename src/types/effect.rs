//! Ambilight styles exposed as light effects.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// Ambilight styles offered as light effects, grouped by what they follow.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, EnumIter, PartialEq, Eq)]
pub enum Effect {
    // Follow video
    Standard,
    Natural,
    Immersive,
    Vivid,
    Game,
    Comfort,
    Relax,
    // Follow audio
    Lumina,
    Retro,
    Spectrum,
    Scanner,
    Rhythm,
    Party,
    // Follow color
    HotLava,
    DeepWater,
    FreshNature,
    WarmWhite,
    ColorCycle,
}

impl Effect {
    /// Name shown in the light's effect list.
    pub fn friendly_name(&self) -> &'static str {
        match self {
            Effect::Standard => "Standard",
            Effect::Natural => "Natural",
            Effect::Immersive => "Football",
            Effect::Vivid => "Vivid",
            Effect::Game => "Game",
            Effect::Comfort => "Comfort",
            Effect::Relax => "Relax",
            Effect::Lumina => "Lumina",
            Effect::Retro => "Retro",
            Effect::Spectrum => "Spectrum",
            Effect::Scanner => "Scanner",
            Effect::Rhythm => "Rhythm",
            Effect::Party => "Party",
            Effect::HotLava => "Hot Lava",
            Effect::DeepWater => "Deep Water",
            Effect::FreshNature => "Fresh Nature",
            Effect::WarmWhite => "Warm White",
            Effect::ColorCycle => "Color Cycle",
        }
    }

    /// Look up an effect by its friendly name.
    ///
    /// # Examples
    ///
    /// ```
    /// use ambilight_rs::Effect;
    ///
    /// assert_eq!(Effect::from_friendly_name("Hot Lava"), Some(Effect::HotLava));
    /// assert_eq!(Effect::from_friendly_name("Disco"), None);
    /// ```
    pub fn from_friendly_name(name: &str) -> Option<Self> {
        Effect::iter().find(|effect| effect.friendly_name() == name)
    }

    /// Friendly names of every effect, in catalogue order.
    pub fn friendly_names() -> Vec<&'static str> {
        Effect::iter().map(|effect| effect.friendly_name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friendly_names_are_unique() {
        let mut names = Effect::friendly_names();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_friendly_name_round_trip() {
        for effect in Effect::iter() {
            assert_eq!(Effect::from_friendly_name(effect.friendly_name()), Some(effect));
        }
    }
}
