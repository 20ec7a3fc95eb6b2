//! Value types for Ambilight colors and light state.

mod brightness;
mod color;
mod effect;
mod hue_saturation;

pub use brightness::Brightness;
pub use color::Color;
pub use effect::Effect;
pub use hue_saturation::HueSaturation;
