//! Location types shared by distance and navigation helpers

use serde::{Deserialize, Serialize};

/// Coordinates
///
/// Degrees, not range-checked. Callers are expected to pass GPS values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// `"lat,lng"` as used in map deep-link query parameters
    pub fn to_query(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }
}
