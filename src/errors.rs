/// All error types that can occur around Ambilight color handling.
///
/// Color aggregation itself never fails; these cover the surfaces that load
/// or parse data before it reaches the aggregator.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to deserialize JSON data.
    #[error("failed to load json: {0:?}")]
    JsonLoad(serde_json::Error),

    /// Failed to parse a [`crate::Color`] from a string.
    #[error("invalid color string: {0}")]
    InvalidColorString(String),

    /// Hue or saturation outside of `0..=360` / `0..=100`.
    #[error("invalid hue/saturation pair ({hue}, {saturation})")]
    InvalidHueSaturation { hue: f64, saturation: f64 },

    /// A coordinator failed to refresh its snapshot from the data source.
    #[error("refresh of {name} failed: {reason}")]
    Refresh { name: String, reason: String },
}

impl Error {
    /// Create a new refresh error
    pub fn refresh(name: &str, reason: &str) -> Self {
        Error::Refresh {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a new invalid hue/saturation error
    pub fn invalid_hue_saturation(hue: f64, saturation: f64) -> Self {
        Error::InvalidHueSaturation { hue, saturation }
    }
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
