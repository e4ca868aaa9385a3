//! Overpass API response types for the `/api/interpreter` endpoint.
//!
//! ## Observed shape from live Overpass instances
//!
//! ### Coordinates
//! Nodes carry top-level `lat`/`lon`. Ways and relations carry neither;
//! when the query ends with `out center`, they instead carry a `center`
//! object with the centroid of their geometry. An element produced by a
//! query without `out center` may have no coordinate at all — normalization
//! drops those.
//!
//! ### `tags`
//! A flat string→string map. Entirely absent for untagged elements, so the
//! field defaults to an empty map. Values are free-form; empty strings do
//! occur in the wild and are treated as absent downstream.

use std::collections::HashMap;

use serde::Deserialize;

/// Top-level response from `POST /api/interpreter`.
#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}

/// A single node/way/relation record from an Overpass result set.
#[derive(Debug, Deserialize)]
pub struct OverpassElement {
    /// Direct latitude; present on nodes only.
    #[serde(default)]
    pub lat: Option<f64>,

    /// Direct longitude; present on nodes only.
    #[serde(default)]
    pub lon: Option<f64>,

    /// Computed centroid; present on ways/relations when the query
    /// requested `out center`.
    #[serde(default)]
    pub center: Option<Center>,

    #[serde(default)]
    pub tags: HashMap<String, String>,
}

/// Centroid coordinate attached to way/relation results.
#[derive(Debug, Deserialize)]
pub struct Center {
    pub lat: f64,
    pub lon: f64,
}
