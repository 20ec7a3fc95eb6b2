//! Entry configuration, configuration-poll state and device metadata.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::Error;
use crate::types::{Brightness, Effect, HueSaturation};

type Result<T> = std::result::Result<T, Error>;

/// Integration domain used in device identifiers.
pub const DOMAIN: &str = "custom_ambilight";

/// How the TV's API is reached.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    #[default]
    Http,
    /// Newer (Android) TVs, which also require credentials.
    Https,
}

/// Data stored for one configured TV.
///
/// # Examples
///
/// ```
/// use ambilight_rs::{ConnectionType, EntryConfig};
///
/// let config = EntryConfig::from_json(r#"{"host": "192.168.1.20", "type": "https",
///     "username": "user", "password": "secret"}"#).unwrap();
/// assert_eq!(config.connection_type, ConnectionType::Https);
/// assert_eq!(config.username.as_deref(), Some("user"));
/// ```
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EntryConfig {
    pub host: String,
    #[serde(rename = "type", default)]
    pub connection_type: ConnectionType,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl EntryConfig {
    pub fn new(host: &str, connection_type: ConnectionType) -> Self {
        EntryConfig {
            host: host.to_string(),
            connection_type,
            username: None,
            password: None,
        }
    }

    pub fn with_credentials(mut self, username: &str, password: &str) -> Self {
        self.username = Some(username.to_string());
        self.password = Some(password.to_string());
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::JsonLoad)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(Error::JsonLoad)
    }
}

/// Configured state of the Ambilight, from the slow configuration poll.
///
/// `hs_color` is only present when the TV runs a fixed color; otherwise the
/// light view falls back to the measured colors.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct AmbilightState {
    #[serde(default)]
    pub power: bool,
    #[serde(default)]
    pub brightness: Option<Brightness>,
    #[serde(default)]
    pub hs_color: Option<HueSaturation>,
    /// Friendly name of the active effect.
    #[serde(default)]
    pub effect: Option<String>,
}

impl AmbilightState {
    /// Load a configuration-poll snapshot.
    ///
    /// # Examples
    ///
    /// ```
    /// use ambilight_rs::AmbilightState;
    /// use serde_json::json;
    ///
    /// let state = AmbilightState::from_value(&json!({
    ///     "power": true,
    ///     "brightness": 200,
    ///     "effect": "Vivid",
    /// })).unwrap();
    /// assert!(state.power);
    /// assert_eq!(state.brightness.unwrap().value(), 200);
    /// assert!(state.hs_color.is_none());
    /// ```
    pub fn from_value(value: &Value) -> Result<Self> {
        Self::deserialize(value).map_err(Error::JsonLoad)
    }

    /// The active effect, if it is one of the known styles.
    pub fn known_effect(&self) -> Option<Effect> {
        self.effect.as_deref().and_then(Effect::from_friendly_name)
    }
}

/// Device registry metadata shared by every view of one TV.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DeviceInfo {
    pub identifiers: Vec<(String, String)>,
    pub name: String,
    pub manufacturer: String,
    pub model: String,
    pub sw_version: String,
}

impl DeviceInfo {
    pub fn for_entry(entry_id: &str) -> Self {
        DeviceInfo {
            identifiers: vec![(DOMAIN.to_string(), entry_id.to_string())],
            name: "Philips Ambilight".to_string(),
            manufacturer: "Philips".to_string(),
            model: "Ambilight".to_string(),
            sw_version: "1.0".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_defaults_to_http() {
        let config = EntryConfig::from_value(json!({"host": "tv.local"})).unwrap();
        assert_eq!(config, EntryConfig::new("tv.local", ConnectionType::Http));
    }

    #[test]
    fn test_entry_skips_missing_credentials() {
        let value = serde_json::to_value(EntryConfig::new("tv.local", ConnectionType::Http)).unwrap();
        assert_eq!(value, json!({"host": "tv.local", "type": "http"}));
    }

    #[test]
    fn test_entry_with_credentials() {
        let config = EntryConfig::from_value(json!({
            "host": "tv.local",
            "type": "https",
            "username": "user",
            "password": "secret",
        }))
        .unwrap();
        assert_eq!(
            config,
            EntryConfig::new("tv.local", ConnectionType::Https).with_credentials("user", "secret")
        );
    }

    #[test]
    fn test_entry_requires_host() {
        assert!(matches!(
            EntryConfig::from_json(r#"{"type": "http"}"#),
            Err(Error::JsonLoad(_))
        ));
    }

    #[test]
    fn test_state_with_hs_color() {
        let state = AmbilightState::from_value(&json!({
            "power": true,
            "hs_color": [120.0, 50.0],
        }))
        .unwrap();
        assert_eq!(state.hs_color, HueSaturation::create(120.0, 50.0));
        assert_eq!(state.known_effect(), None);
    }

    #[test]
    fn test_state_rejects_invalid_hs_color() {
        assert!(AmbilightState::from_value(&json!({"hs_color": [500.0, 50.0]})).is_err());
    }

    #[test]
    fn test_device_info() {
        let info = DeviceInfo::for_entry("abc");
        assert_eq!(info.identifiers, vec![(DOMAIN.to_string(), "abc".to_string())]);
        assert_eq!(info.manufacturer, "Philips");
    }
}
