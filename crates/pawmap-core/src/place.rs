//! Domain types shared across the workspace.

use serde::{Deserialize, Serialize};

/// A point on the Earth's surface in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A normalized nearby-place result.
///
/// The shape is fixed at exactly these four fields so downstream consumers
/// (the bot reply formatter, JSON output) never have to branch on which
/// provider produced the record. `rating` is carried for wire compatibility
/// with the previous paid-places provider; OSM has no rating concept, so it
/// is always `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub name: Option<String>,
    pub address: Option<String>,
    pub rating: Option<f64>,
    pub distance_m: u64,
}

/// Which place category a search targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Veterinary,
    PetFriendlyFood,
}

impl SearchMode {
    /// Parses a caller-supplied mode string.
    ///
    /// Accepts the canonical names plus the short aliases the bot commands
    /// use (`pet_food`, `food`). Matching is case-insensitive and ignores
    /// surrounding whitespace. Returns `None` for anything unrecognized.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "veterinary" => Some(Self::Veterinary),
            "pet_friendly_food" | "pet_food" | "food" => Some(Self::PetFriendlyFood),
            _ => None,
        }
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Veterinary => write!(f, "veterinary"),
            Self::PetFriendlyFood => write!(f, "pet_friendly_food"),
        }
    }
}
