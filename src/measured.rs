//! Aggregation of measured Ambilight colors.
//!
//! The TV reports what its LEDs currently show as a nested JSON mapping of
//! side → layer → color:
//!
//! ```json
//! {
//!     "left":  { "0": { "r": 12, "g": 40, "b": 200 }, "1": [10, 38, 190] },
//!     "right": { "0": { "red": 250, "green": 120, "blue": 0 } }
//! }
//! ```
//!
//! Each leaf is parsed exactly once into a [`LayerSample`]. Leaves that are
//! not a three-channel numeric color are kept as [`LayerSample::Unparseable`]
//! and never contribute to an average. Aggregation is total: missing or
//! malformed input yields `None` (or an empty map), never an error.
//!
//! Channel means are rounded half-up (127.5 becomes 128) and clamped to
//! `0..=255` when converted into a [`Color`].

use std::collections::BTreeMap;

use log::trace;
use serde_json::Value;

use crate::types::Color;

/// Raw channel values of one measured layer, as reported by the TV.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Sample {
    /// Parse a leaf.
    ///
    /// Accepts `[r, g, b]`, `{"r", "g", "b"}` or `{"red", "green", "blue"}`
    /// with numeric channels.
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Array(items) => match items.as_slice() {
                [r, g, b] => Self::from_channels(r, g, b),
                _ => None,
            },
            Value::Object(map) => {
                // A numeric short key wins; otherwise the long key is tried.
                let channel = |short: &str, long: &str| {
                    map.get(short)
                        .and_then(Value::as_f64)
                        .or_else(|| map.get(long).and_then(Value::as_f64))
                };
                Some(Sample {
                    red: channel("r", "red")?,
                    green: channel("g", "green")?,
                    blue: channel("b", "blue")?,
                })
            }
            _ => None,
        }
    }

    fn from_channels(red: &Value, green: &Value, blue: &Value) -> Option<Self> {
        Some(Sample {
            red: red.as_f64()?,
            green: green.as_f64()?,
            blue: blue.as_f64()?,
        })
    }
}

/// One parsed layer leaf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayerSample {
    /// A well-formed three-channel color.
    Parsed(Sample),
    /// Anything else: null, strings, short or long lists, non-numeric channels.
    Unparseable,
}

impl LayerSample {
    pub fn parse(value: &Value) -> Self {
        Sample::from_value(value).map_or(LayerSample::Unparseable, LayerSample::Parsed)
    }

    pub fn sample(&self) -> Option<&Sample> {
        match self {
            LayerSample::Parsed(sample) => Some(sample),
            LayerSample::Unparseable => None,
        }
    }
}

/// The parsed layers of one side.
///
/// A side whose value is not a mapping (or list) of layers has no layers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SideSamples {
    layers: BTreeMap<String, LayerSample>,
}

impl SideSamples {
    /// Parse the layers of `side`.
    ///
    /// A list of leaves is read as a mapping from list index to leaf.
    pub fn from_value(side: &str, value: &Value) -> Self {
        let layers = match value {
            Value::Object(map) => map
                .iter()
                .map(|(layer, leaf)| (layer.clone(), parse_leaf(side, layer, leaf)))
                .collect(),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, leaf)| {
                    let layer = index.to_string();
                    let sample = parse_leaf(side, &layer, leaf);
                    (layer, sample)
                })
                .collect(),
            _ => {
                trace!("measured side {side} has no layer mapping: {value}");
                BTreeMap::new()
            }
        };
        SideSamples { layers }
    }

    pub fn layer(&self, layer: &str) -> Option<&LayerSample> {
        self.layers.get(layer)
    }

    pub fn layers(&self) -> impl Iterator<Item = (&str, &LayerSample)> {
        self.layers.iter().map(|(layer, sample)| (layer.as_str(), sample))
    }

    /// Number of layers present, parseable or not.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Average color of this side's parseable layers.
    pub fn average(&self) -> Option<Color> {
        average(self.samples())
    }

    fn samples(&self) -> impl Iterator<Item = &Sample> {
        self.layers.values().filter_map(LayerSample::sample)
    }
}

/// A measured color snapshot, parsed into sides and layers.
///
/// # Examples
///
/// ```
/// use ambilight_rs::{Color, MeasuredColorMap};
/// use serde_json::json;
///
/// let measured = MeasuredColorMap::from_value(&json!({
///     "left": { "0": [0, 0, 0] },
///     "right": { "0": [255, 255, 255] },
/// }));
/// assert_eq!(measured.average(), Some(Color::rgb(128, 128, 128)));
/// assert_eq!(measured.average_for_side("right"), Some(Color::rgb(255, 255, 255)));
/// assert_eq!(measured.average_for_side("top"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasuredColorMap {
    sides: BTreeMap<String, SideSamples>,
}

impl MeasuredColorMap {
    /// Parse a snapshot. Anything other than a JSON object has no sides.
    pub fn from_value(measured: &Value) -> Self {
        let Some(map) = measured.as_object() else {
            trace!("measured colors are not a mapping: {measured}");
            return Self::default();
        };
        MeasuredColorMap {
            sides: map
                .iter()
                .map(|(side, layers)| (side.clone(), SideSamples::from_value(side, layers)))
                .collect(),
        }
    }

    pub fn side(&self, side: &str) -> Option<&SideSamples> {
        self.sides.get(side)
    }

    /// Side names present in the snapshot, in sorted order.
    pub fn sides(&self) -> impl Iterator<Item = &str> {
        self.sides.keys().map(String::as_str)
    }

    /// True when the snapshot has no sides at all.
    pub fn is_empty(&self) -> bool {
        self.sides.is_empty()
    }

    /// Average over every parseable layer of every side.
    pub fn average(&self) -> Option<Color> {
        average(self.sides.values().flat_map(SideSamples::samples))
    }

    /// Average of each side present, `None` for sides without usable layers.
    pub fn average_by_side(&self) -> BTreeMap<String, Option<Color>> {
        self.sides
            .iter()
            .map(|(side, samples)| (side.clone(), samples.average()))
            .collect()
    }

    pub fn average_for_side(&self, side: &str) -> Option<Color> {
        self.sides.get(side).and_then(SideSamples::average)
    }
}

/// Average color over every side and layer of a measured snapshot.
///
/// Returns `None` when the snapshot holds no parseable color.
///
/// # Examples
///
/// ```
/// use ambilight_rs::{average_all, Color};
/// use serde_json::json;
///
/// let measured = json!({ "left": { "0": [0, 0, 0], "1": [10, 10, 10] } });
/// assert_eq!(average_all(&measured), Some(Color::rgb(5, 5, 5)));
/// assert_eq!(average_all(&json!(null)), None);
/// ```
pub fn average_all(measured: &Value) -> Option<Color> {
    MeasuredColorMap::from_value(measured).average()
}

/// Average color of each side of a measured snapshot.
///
/// Every side key of the input is present in the result, mapped to `None`
/// when that side has no parseable layer. Non-mapping input yields an empty
/// map.
pub fn average_by_side(measured: &Value) -> BTreeMap<String, Option<Color>> {
    MeasuredColorMap::from_value(measured).average_by_side()
}

/// Average color of one side, parsing only that side.
///
/// # Examples
///
/// ```
/// use ambilight_rs::{average_for_side, Color};
/// use serde_json::json;
///
/// let measured = json!({ "left": { "0": { "r": 10, "g": 20, "b": 30 } } });
/// assert_eq!(average_for_side(&measured, "left"), Some(Color::rgb(10, 20, 30)));
/// assert_eq!(average_for_side(&measured, "right"), None);
/// ```
pub fn average_for_side(measured: &Value, side: &str) -> Option<Color> {
    let layers = measured.as_object()?.get(side)?;
    SideSamples::from_value(side, layers).average()
}

fn parse_leaf(side: &str, layer: &str, leaf: &Value) -> LayerSample {
    let sample = LayerSample::parse(leaf);
    if sample == LayerSample::Unparseable {
        trace!("skipping malformed measured color at {side}/{layer}: {leaf}");
    }
    sample
}

fn average<'a>(samples: impl IntoIterator<Item = &'a Sample>) -> Option<Color> {
    let mut count = 0usize;
    let mut sums = [0.0f64; 3];
    for sample in samples {
        count += 1;
        sums[0] += sample.red;
        sums[1] += sample.green;
        sums[2] += sample.blue;
    }
    if count == 0 {
        return None;
    }

    let [red, green, blue] = sums.map(|sum| to_channel(sum / count as f64));
    Some(Color::rgb(red, green, blue))
}

// Half-up rounding for the non-negative range; out-of-range means are clamped.
fn to_channel(mean: f64) -> u8 {
    mean.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_data() {
        for measured in [json!(null), json!({}), json!([]), json!("left"), json!(42)] {
            assert_eq!(average_all(&measured), None);
            assert!(average_by_side(&measured).is_empty());
            assert_eq!(average_for_side(&measured, "left"), None);
        }
    }

    #[test]
    fn test_all_malformed() {
        let measured = json!({
            "left": { "0": "red", "1": [1, 2], "2": null },
            "right": 7,
        });
        assert_eq!(average_all(&measured), None);
        assert_eq!(
            average_by_side(&measured),
            BTreeMap::from([("left".to_string(), None), ("right".to_string(), None)])
        );
    }

    #[test]
    fn test_single_layer() {
        let measured = json!({ "left": { "0": [10, 20, 30] } });
        let expected = Some(Color::rgb(10, 20, 30));

        assert_eq!(average_all(&measured), expected);
        assert_eq!(
            average_by_side(&measured),
            BTreeMap::from([("left".to_string(), expected)])
        );
        assert_eq!(average_for_side(&measured, "left"), expected);
        assert_eq!(average_for_side(&measured, "right"), None);
    }

    #[test]
    fn test_two_layers_exact_mean() {
        let measured = json!({ "left": { "0": [0, 0, 0], "1": [10, 10, 10] } });
        assert_eq!(average_for_side(&measured, "left"), Some(Color::rgb(5, 5, 5)));
    }

    #[test]
    fn test_pools_across_sides_and_rounds_half_up() {
        let measured = json!({
            "left": { "0": [0, 0, 0] },
            "right": { "0": [255, 255, 255] },
        });
        assert_eq!(average_all(&measured), Some(Color::rgb(128, 128, 128)));
    }

    #[test]
    fn test_rounds_to_nearest() {
        let measured = json!({ "top": { "0": [0, 0, 0], "1": [0, 0, 0], "2": [1, 2, 4] } });
        // 1/3, 2/3 and 4/3
        assert_eq!(average_all(&measured), Some(Color::rgb(0, 1, 1)));
    }

    #[test]
    fn test_malformed_leaf_skipped_not_zero() {
        for bad in [json!("#ffffff"), json!([1, 2]), json!([1, 2, 3, 4]), json!(["a", 2, 3])] {
            let measured = json!({ "left": { "0": [100, 100, 100], "1": bad } });
            assert_eq!(average_all(&measured), Some(Color::rgb(100, 100, 100)));
            assert_eq!(
                average_for_side(&measured, "left"),
                Some(Color::rgb(100, 100, 100))
            );
        }
    }

    #[test]
    fn test_black_is_not_undefined() {
        let measured = json!({ "left": { "0": [0, 0, 0] }, "right": {} });
        assert_eq!(average_for_side(&measured, "left"), Some(Color::new()));
        assert_eq!(average_for_side(&measured, "right"), None);
    }

    #[test]
    fn test_by_side_keeps_every_side_key() {
        let measured = json!({
            "left": { "0": [10, 20, 30] },
            "right": { "0": "garbage" },
            "bottom": null,
        });
        let by_side = average_by_side(&measured);
        assert_eq!(by_side.len(), 3);
        assert_eq!(by_side["left"], Some(Color::rgb(10, 20, 30)));
        assert_eq!(by_side["right"], None);
        assert_eq!(by_side["bottom"], None);
    }

    #[test]
    fn test_leaf_shapes() {
        let measured = json!({
            "left": {
                "0": { "r": 30, "g": 0, "b": 0 },
                "1": { "red": 0, "green": 30, "blue": 0 },
                "2": [0, 0, 30],
                "3": { "r": 1, "g": 1 },
            }
        });
        assert_eq!(average_all(&measured), Some(Color::rgb(10, 10, 10)));
    }

    #[test]
    fn test_long_key_used_when_short_key_not_numeric() {
        let leaf = json!({ "r": "x", "red": 5, "g": 6, "green": "y", "b": null, "blue": 7 });
        assert_eq!(
            LayerSample::parse(&leaf).sample(),
            Some(&Sample { red: 5.0, green: 6.0, blue: 7.0 })
        );
        assert_eq!(
            LayerSample::parse(&json!({ "r": "x", "g": 1, "b": 1 })),
            LayerSample::Unparseable
        );
    }

    #[test]
    fn test_side_as_list_of_layers() {
        let measured = json!({ "right": [[2, 4, 6], [4, 8, 12]] });
        let parsed = MeasuredColorMap::from_value(&measured);
        let right = parsed.side("right").unwrap();
        assert_eq!(right.len(), 2);
        assert!(right.layer("1").is_some());
        assert_eq!(parsed.average_for_side("right"), Some(Color::rgb(3, 6, 9)));
    }

    #[test]
    fn test_out_of_range_means_are_clamped() {
        let measured = json!({ "left": { "0": [-20, 300, 127.4] } });
        assert_eq!(average_all(&measured), Some(Color::rgb(0, 255, 127)));
    }

    #[test]
    fn test_idempotent() {
        let measured = json!({
            "left": { "0": [1, 2, 3], "1": [4, 5, 6] },
            "right": { "0": [7, 8, 9], "1": "x" },
        });
        assert_eq!(average_all(&measured), average_all(&measured));
        assert_eq!(average_by_side(&measured), average_by_side(&measured));
        assert_eq!(
            average_for_side(&measured, "right"),
            average_for_side(&measured, "right")
        );
    }

    #[test]
    fn test_for_side_matches_by_side() {
        let measured = json!({
            "left": { "0": [1, 2, 3], "1": [4, 5, 6] },
            "right": { "0": [7, 8, 9] },
            "top": "nothing",
        });
        let by_side = average_by_side(&measured);
        for side in ["left", "right", "top", "bottom"] {
            assert_eq!(
                average_for_side(&measured, side),
                by_side.get(side).copied().flatten()
            );
        }
    }

    #[test]
    fn test_layer_sample_parse() {
        assert_eq!(
            LayerSample::parse(&json!([1, 2.5, 3])),
            LayerSample::Parsed(Sample { red: 1.0, green: 2.5, blue: 3.0 })
        );
        assert_eq!(LayerSample::parse(&json!(true)), LayerSample::Unparseable);
        assert_eq!(LayerSample::parse(&json!({ "r": "1", "g": 2, "b": 3 })), LayerSample::Unparseable);
    }
}
