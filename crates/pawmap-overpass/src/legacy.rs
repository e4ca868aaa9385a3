//! Compatibility shims for callers written against the previous paid
//! places provider.
//!
//! Pure signature translation: the key, language, and field-mask
//! parameters that provider required have no Overpass equivalent and are
//! accepted then ignored, so call sites migrate without touching their
//! argument lists.

use pawmap_core::PlaceRecord;

use crate::client::OverpassClient;
use crate::error::OverpassError;
use crate::search::search_nearby_veterinary;

/// Drop-in replacement for the old `search_nearby_veterinary` signature.
///
/// `api_key` and `language` are ignored; Overpass needs neither.
///
/// # Errors
///
/// Same as [`search_nearby_veterinary`].
pub async fn search_nearby_veterinary_legacy(
    client: &OverpassClient,
    api_key: &str,
    lat: f64,
    lon: f64,
    radius: u32,
    language: Option<&str>,
    top_n: usize,
) -> Result<Vec<PlaceRecord>, OverpassError> {
    let _ = (api_key, language);
    search_nearby_veterinary(client, lat, lon, radius, top_n).await
}

/// Drop-in replacement for the old v1 signature, which took a float radius
/// and a response field mask.
///
/// `api_key` and `field_mask` are ignored; the radius is truncated to
/// whole meters.
///
/// # Errors
///
/// Same as [`search_nearby_veterinary`].
pub async fn search_nearby_veterinary_v1(
    client: &OverpassClient,
    api_key: &str,
    lat: f64,
    lon: f64,
    radius: f64,
    max_results: usize,
    field_mask: Option<&str>,
) -> Result<Vec<PlaceRecord>, OverpassError> {
    let _ = (api_key, field_mask);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let radius_m = radius as u32;
    search_nearby_veterinary(client, lat, lon, radius_m, max_results).await
}
