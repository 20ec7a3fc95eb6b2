//! # ambilight_rs
//!
//! Measured-color aggregation and light/sensor views for Philips Ambilight TVs.
//!
//! An Ambilight TV reports the colors its LEDs currently show as a nested
//! side → layer → color mapping. This crate turns such a snapshot into the
//! values a home-automation integration shows: one overall average color,
//! one average per side, and their hex and hue/saturation forms.
//!
//! ## Quick Start
//!
//! ```
//! use ambilight_rs::{average_all, average_by_side, average_for_side, Color};
//! use serde_json::json;
//!
//! let measured = json!({
//!     "left":  { "0": { "r": 0, "g": 0, "b": 0 } },
//!     "right": { "0": { "r": 255, "g": 255, "b": 255 }, "1": "glitch" },
//! });
//!
//! assert_eq!(average_all(&measured), Some(Color::rgb(128, 128, 128)));
//! assert_eq!(average_for_side(&measured, "right").unwrap().to_hex(), "#ffffff");
//! assert_eq!(average_by_side(&measured).len(), 2);
//! assert_eq!(average_for_side(&measured, "top"), None);
//! ```
//!
//! ## Features
//!
//! - **Aggregation**: [`average_all`], [`average_by_side`] and
//!   [`average_for_side`] never fail; missing or malformed data yields `None`
//! - **Colors**: [`Color`] with `#rrggbb` formatting and [`HueSaturation`]
//! - **Light view**: [`AmbilightLight`] with configured or measured color
//! - **Sensor views**: [`MeasuredColorSensor`] and [`MeasuredSideColorSensor`]
//! - **Effects**: the Ambilight style catalogue as [`Effect`]
//! - **Polling**: [`coordinator::Coordinator`] caches the latest poll result
//!
//! ## Feature Flags
//!
//! - `coordinator` (default): tokio-based polling coordinators

mod config;
#[cfg(feature = "coordinator")]
pub mod coordinator;
mod errors;
mod light;
mod measured;
mod sensor;
mod snapshot;
mod types;

// Re-export public API
pub use config::{AmbilightState, ConnectionType, DOMAIN, DeviceInfo, EntryConfig};
pub use errors::Error;
pub use light::AmbilightLight;
pub use measured::{
    LayerSample, MeasuredColorMap, Sample, SideSamples, average_all, average_by_side,
    average_for_side,
};
pub use sensor::{MeasuredColorSensor, MeasuredSideColorSensor, default_sensors};
pub use snapshot::Snapshot;
pub use types::{Brightness, Color, Effect, HueSaturation};
