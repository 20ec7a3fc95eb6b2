//! The Ambilight as a light.

use serde_json::{Map, Value, json};

use crate::config::{AmbilightState, DeviceInfo};
use crate::measured::MeasuredColorMap;
use crate::snapshot::Snapshot;
use crate::types::{Brightness, Effect, HueSaturation};

/// Light view of one Ambilight TV.
///
/// State comes from two snapshots: the configured [`AmbilightState`] and the
/// measured LED colors. Nothing is cached; every accessor recomputes from
/// the snapshots it is given.
///
/// # Example
///
/// ```
/// use ambilight_rs::{AmbilightLight, AmbilightState, HueSaturation, Snapshot};
/// use serde_json::json;
///
/// let light = AmbilightLight::new("entry-1");
/// let state = AmbilightState { power: true, ..Default::default() };
/// let measured = Snapshot::ok(json!({ "left": { "0": [0, 0, 255] } }));
///
/// assert!(light.is_on(&state));
/// assert_eq!(light.hs_color(&state, &measured), HueSaturation::create(240.0, 100.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AmbilightLight {
    unique_id: String,
    device_info: DeviceInfo,
}

impl AmbilightLight {
    pub const TRANSLATION_KEY: &'static str = "ambilight";

    pub fn new(entry_id: &str) -> Self {
        AmbilightLight {
            unique_id: entry_id.to_string(),
            device_info: DeviceInfo::for_entry(entry_id),
        }
    }

    /// The config entry id.
    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn device_info(&self) -> &DeviceInfo {
        &self.device_info
    }

    pub fn translation_key(&self) -> &'static str {
        Self::TRANSLATION_KEY
    }

    pub fn is_on(&self, state: &AmbilightState) -> bool {
        state.power
    }

    pub fn brightness(&self, state: &AmbilightState) -> Option<Brightness> {
        state.brightness
    }

    pub fn effect_list(&self) -> Vec<&'static str> {
        Effect::friendly_names()
    }

    pub fn effect<'a>(&self, state: &'a AmbilightState) -> Option<&'a str> {
        state.effect.as_deref()
    }

    /// The configured color, falling back to the average measured color.
    ///
    /// The measured fallback is only used when the latest measured refresh
    /// succeeded, and is rounded to one decimal.
    pub fn hs_color(&self, state: &AmbilightState, measured: &Snapshot) -> Option<HueSaturation> {
        if let Some(configured) = state.hs_color {
            return Some(configured);
        }

        let measured = measured_map(measured)?;
        let rgb = measured.average()?;
        Some(HueSaturation::from_color(&rgb).rounded())
    }

    /// Measured colors exposed next to the light state.
    ///
    /// `ambilight_measured_avg_rgb` is `[r, g, b]` when any side has a usable
    /// layer. `ambilight_measured_avg_rgb_by_side` maps every reported side
    /// to `[r, g, b]` or `null`.
    pub fn extra_state_attributes(&self, measured: &Snapshot) -> Map<String, Value> {
        let mut attrs = Map::new();
        let Some(measured) = measured_map(measured) else {
            return attrs;
        };

        if let Some(overall) = measured.average() {
            attrs.insert("ambilight_measured_avg_rgb".to_string(), json!(overall));
        }
        let by_side = measured.average_by_side();
        if !by_side.is_empty() {
            attrs.insert(
                "ambilight_measured_avg_rgb_by_side".to_string(),
                json!(by_side),
            );
        }
        attrs
    }
}

fn measured_map(measured: &Snapshot) -> Option<MeasuredColorMap> {
    measured
        .fresh()
        .filter(|data| data.is_object())
        .map(MeasuredColorMap::from_value)
}
