//! Normalization from raw Overpass elements to [`PlaceRecord`]s.
//!
//! Elements without a usable coordinate are dropped silently; an empty
//! output can therefore mean "no matches" or "nothing had coordinates" —
//! callers cannot tell the difference, by contract.

use std::collections::{HashMap, HashSet};

use pawmap_core::{GeoPoint, PlaceRecord};

use crate::distance::haversine_m;
use crate::types::{OverpassElement, OverpassResponse};

/// OSM address fragment tags, in the order they are joined into a display
/// address when `addr:full` is absent.
const ADDRESS_TAG_ORDER: [&str; 5] = [
    "addr:housenumber",
    "addr:street",
    "addr:district",
    "addr:city",
    "addr:postcode",
];

/// Converts a raw response into sorted, truncated [`PlaceRecord`]s.
///
/// When `dedupe` is set, later elements repeating an already-seen
/// `(name, address)` pair are dropped — a way and its member node often
/// both match the same query, and the food searches want one record per
/// place. The veterinary search passes `false` and keeps every element.
///
/// Output is sorted ascending by `distance_m` (stable, so equidistant
/// records keep response order) and truncated to `top_n`.
#[must_use]
pub fn normalize_elements(
    response: OverpassResponse,
    origin: GeoPoint,
    dedupe: bool,
    top_n: usize,
) -> Vec<PlaceRecord> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut records: Vec<PlaceRecord> = Vec::new();

    for element in response.elements {
        let Some(coordinate) = element_coordinate(&element) else {
            continue;
        };

        let name = element
            .tags
            .get("name")
            .filter(|n| !n.is_empty())
            .cloned();
        let address = build_address(&element.tags);

        if dedupe {
            let key = (
                name.clone().unwrap_or_default(),
                address.clone().unwrap_or_default(),
            );
            if !seen.insert(key) {
                continue;
            }
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let distance_m = haversine_m(origin, coordinate).round() as u64;

        records.push(PlaceRecord {
            name,
            address,
            rating: None,
            distance_m,
        });
    }

    records.sort_by_key(|r| r.distance_m);
    records.truncate(top_n);
    records
}

/// Returns the element's coordinate: direct `lat`/`lon` for nodes, the
/// `center` centroid for ways/relations, `None` when neither is present.
fn element_coordinate(element: &OverpassElement) -> Option<GeoPoint> {
    if let (Some(lat), Some(lon)) = (element.lat, element.lon) {
        return Some(GeoPoint::new(lat, lon));
    }
    element
        .center
        .as_ref()
        .map(|c| GeoPoint::new(c.lat, c.lon))
}

/// Best-effort display address from OSM tags.
///
/// A non-empty `addr:full` wins outright (trimmed; whitespace-only yields
/// `None` rather than falling through). Otherwise the fragments in
/// [`ADDRESS_TAG_ORDER`] that are present and non-empty are space-joined;
/// shops that only filled `contact:address` fall back to that.
fn build_address(tags: &HashMap<String, String>) -> Option<String> {
    if let Some(full) = tags.get("addr:full") {
        if !full.is_empty() {
            let trimmed = full.trim();
            return (!trimmed.is_empty()).then(|| trimmed.to_string());
        }
    }

    let mut parts: Vec<&str> = ADDRESS_TAG_ORDER
        .iter()
        .filter_map(|key| tags.get(*key))
        .filter(|v| !v.is_empty())
        .map(String::as_str)
        .collect();

    if parts.is_empty() {
        if let Some(contact) = tags.get("contact:address").filter(|v| !v.is_empty()) {
            parts.push(contact);
        }
    }

    let address = parts.join(" ").trim().to_string();
    (!address.is_empty()).then_some(address)
}
