//! High-level nearby-place searches.
//!
//! Each function is one query, one HTTP exchange (with retries inside the
//! client), one normalization pass. No state is shared between calls.

use pawmap_core::{GeoPoint, PlaceRecord, SearchMode};

use crate::client::OverpassClient;
use crate::error::OverpassError;
use crate::normalize::normalize_elements;
use crate::query;

/// Searches for veterinary clinics around `(lat, lon)`.
///
/// # Errors
///
/// Propagates transport failures from [`OverpassClient::execute`].
pub async fn search_nearby_veterinary(
    client: &OverpassClient,
    lat: f64,
    lon: f64,
    radius_m: u32,
    top_n: usize,
) -> Result<Vec<PlaceRecord>, OverpassError> {
    let origin = GeoPoint::new(lat, lon);
    tracing::debug!(lat, lon, radius_m, "searching nearby veterinary clinics");
    let response = client
        .execute(&query::veterinary_query(origin, radius_m))
        .await?;
    Ok(normalize_elements(response, origin, false, top_n))
}

/// Searches for pet-friendly restaurants and cafes around `(lat, lon)`.
///
/// `strict` limits results to places explicitly tagged dog- or
/// pet-friendly. Non-strict returns every restaurant/cafe in range, which
/// is broader than "pet friendly" — callers post-filter. Either way,
/// results are deduplicated by `(name, address)` since a way and its
/// member node frequently both match.
///
/// # Errors
///
/// Propagates transport failures from [`OverpassClient::execute`].
pub async fn search_nearby_pet_friendly_food(
    client: &OverpassClient,
    lat: f64,
    lon: f64,
    radius_m: u32,
    top_n: usize,
    strict: bool,
) -> Result<Vec<PlaceRecord>, OverpassError> {
    let origin = GeoPoint::new(lat, lon);
    tracing::debug!(lat, lon, radius_m, strict, "searching nearby pet-friendly food");
    let response = client
        .execute(&query::pet_friendly_food_query(origin, radius_m, strict))
        .await?;
    Ok(normalize_elements(response, origin, true, top_n))
}

/// Unified entry point dispatching on a mode string.
///
/// Food searches through this entry run in strict mode.
///
/// # Errors
///
/// Returns [`OverpassError::InvalidMode`] immediately (no HTTP traffic)
/// for an unrecognized mode; otherwise propagates the underlying search's
/// errors.
pub async fn search_nearby(
    client: &OverpassClient,
    lat: f64,
    lon: f64,
    radius_m: u32,
    top_n: usize,
    mode: &str,
) -> Result<Vec<PlaceRecord>, OverpassError> {
    match SearchMode::parse(mode) {
        Some(SearchMode::Veterinary) => {
            search_nearby_veterinary(client, lat, lon, radius_m, top_n).await
        }
        Some(SearchMode::PetFriendlyFood) => {
            search_nearby_pet_friendly_food(client, lat, lon, radius_m, top_n, true).await
        }
        None => Err(OverpassError::InvalidMode(mode.to_string())),
    }
}
