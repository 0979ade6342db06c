use serde::{Deserialize, Serialize};
use std::fmt;

/// A place as returned by the Places Text Search API. Only the fields the
/// itinerary engine reads are kept; everything else in the payload is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPlace {
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub price_level: Option<u8>,
}

impl RawPlace {
    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }

    pub fn has_any_type(&self, tags: &[&str]) -> bool {
        tags.iter().any(|tag| self.has_type(tag))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Location bias in the `point:lat,lng` form the Places API accepts
    pub fn as_location_bias(&self) -> String {
        format!("point:{}", self)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}
