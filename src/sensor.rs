//! Measured Ambilight colors as sensors.
//!
//! Both sensors report a `#rrggbb` state and expose the same color as RGB
//! and hue/saturation attributes. They read the measured snapshot's data
//! even after a failed refresh; availability is reported separately.

use serde_json::{Map, Value, json};

use crate::config::DeviceInfo;
use crate::measured::{MeasuredColorMap, average_for_side};
use crate::snapshot::Snapshot;
use crate::types::{Color, HueSaturation};

/// Average color of the whole Ambilight.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredColorSensor {
    unique_id: String,
    device_info: DeviceInfo,
}

impl MeasuredColorSensor {
    pub const TRANSLATION_KEY: &'static str = "ambilight_measured_color";

    pub fn new(entry_id: &str) -> Self {
        MeasuredColorSensor {
            unique_id: format!("{entry_id}_measured_color"),
            device_info: DeviceInfo::for_entry(entry_id),
        }
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn device_info(&self) -> &DeviceInfo {
        &self.device_info
    }

    pub fn translation_key(&self) -> &'static str {
        Self::TRANSLATION_KEY
    }

    pub fn available(&self, measured: &Snapshot) -> bool {
        measured.last_update_success
    }

    /// `#rrggbb` of the average measured color.
    ///
    /// # Examples
    ///
    /// ```
    /// use ambilight_rs::{MeasuredColorSensor, Snapshot};
    /// use serde_json::json;
    ///
    /// let sensor = MeasuredColorSensor::new("entry-1");
    /// let measured = Snapshot::ok(json!({
    ///     "left": { "0": [0, 0, 0] },
    ///     "right": { "0": [255, 255, 255] },
    /// }));
    /// assert_eq!(sensor.native_value(&measured).as_deref(), Some("#808080"));
    /// ```
    pub fn native_value(&self, measured: &Snapshot) -> Option<String> {
        measured_map(measured)?.average().map(|rgb| rgb.to_hex())
    }

    /// `avg_rgb` and `avg_hs` of the overall average, plus `avg_rgb_by_side`
    /// with `null` for sides without usable layers.
    pub fn extra_state_attributes(&self, measured: &Snapshot) -> Map<String, Value> {
        let Some(measured) = measured_map(measured) else {
            return Map::new();
        };

        let mut attrs = color_attributes(measured.average());
        let by_side = measured.average_by_side();
        if !by_side.is_empty() {
            attrs.insert("avg_rgb_by_side".to_string(), json!(by_side));
        }
        attrs
    }
}

/// Average color of one side of the Ambilight.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredSideColorSensor {
    side: String,
    unique_id: String,
    device_info: DeviceInfo,
}

impl MeasuredSideColorSensor {
    pub fn new(entry_id: &str, side: &str) -> Self {
        MeasuredSideColorSensor {
            side: side.to_string(),
            unique_id: format!("{entry_id}_measured_color_{side}"),
            device_info: DeviceInfo::for_entry(entry_id),
        }
    }

    pub fn side(&self) -> &str {
        &self.side
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn device_info(&self) -> &DeviceInfo {
        &self.device_info
    }

    /// Left and right have their own names; other sides share the overall one.
    pub fn translation_key(&self) -> &'static str {
        match self.side.as_str() {
            "left" => "ambilight_measured_color_left",
            "right" => "ambilight_measured_color_right",
            _ => MeasuredColorSensor::TRANSLATION_KEY,
        }
    }

    pub fn available(&self, measured: &Snapshot) -> bool {
        measured.last_update_success
    }

    pub fn native_value(&self, measured: &Snapshot) -> Option<String> {
        self.average(measured).map(|rgb| rgb.to_hex())
    }

    /// `avg_rgb` and `avg_hs` of this side, or nothing when it has no color.
    pub fn extra_state_attributes(&self, measured: &Snapshot) -> Map<String, Value> {
        color_attributes(self.average(measured))
    }

    fn average(&self, measured: &Snapshot) -> Option<Color> {
        let data = measured.data.as_ref()?;
        average_for_side(data, &self.side)
    }
}

/// The overall sensor plus the left and right side sensors.
pub fn default_sensors(entry_id: &str) -> (MeasuredColorSensor, Vec<MeasuredSideColorSensor>) {
    (
        MeasuredColorSensor::new(entry_id),
        ["left", "right"]
            .into_iter()
            .map(|side| MeasuredSideColorSensor::new(entry_id, side))
            .collect(),
    )
}

fn measured_map(measured: &Snapshot) -> Option<MeasuredColorMap> {
    measured
        .data
        .as_ref()
        .filter(|data| data.is_object())
        .map(MeasuredColorMap::from_value)
}

fn color_attributes(rgb: Option<Color>) -> Map<String, Value> {
    let mut attrs = Map::new();
    if let Some(rgb) = rgb {
        attrs.insert("avg_rgb".to_string(), json!(rgb));
        attrs.insert(
            "avg_hs".to_string(),
            json!(HueSaturation::from_color(&rgb).rounded()),
        );
    }
    attrs
}
