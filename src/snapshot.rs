//! The last result a coordinator handed to its views.

use serde_json::Value;

/// Data of the last successful refresh plus whether the latest refresh
/// succeeded.
///
/// A failed refresh keeps the previous data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub data: Option<Value>,
    pub last_update_success: bool,
}

impl Snapshot {
    /// A snapshot from a successful refresh.
    pub fn ok(data: Value) -> Self {
        Snapshot {
            data: Some(data),
            last_update_success: true,
        }
    }

    /// A snapshot whose latest refresh failed, keeping `data` from before.
    pub fn failed(data: Option<Value>) -> Self {
        Snapshot {
            data,
            last_update_success: false,
        }
    }

    /// The data, but only when the latest refresh succeeded.
    ///
    /// # Examples
    ///
    /// ```
    /// use ambilight_rs::Snapshot;
    /// use serde_json::json;
    ///
    /// assert!(Snapshot::ok(json!({})).fresh().is_some());
    /// assert!(Snapshot::failed(Some(json!({}))).fresh().is_none());
    /// ```
    pub fn fresh(&self) -> Option<&Value> {
        if self.last_update_success {
            self.data.as_ref()
        } else {
            None
        }
    }
}
