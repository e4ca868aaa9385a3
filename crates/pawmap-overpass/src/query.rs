//! Overpass QL query construction.
//!
//! Every query follows the same skeleton: a JSON output header, a union
//! block over the three OSM element types (node, way, relation), and an
//! `out center tags;` footer so ways and relations come back with a
//! computed centroid alongside their tags.

use pawmap_core::GeoPoint;

/// Per-query server-side evaluation timeout, in seconds. Distinct from the
/// HTTP request timeout on the client.
const SERVER_TIMEOUT_SECS: u32 = 25;

const ELEMENT_TYPES: [&str; 3] = ["node", "way", "relation"];

/// Tag filter matching places that explicitly welcome dogs.
/// `dog=outside` (allowed on the terrace) counts as friendly.
const DOG_FILTER: &str = r#"["dog"~"^(yes|outside)$"]"#;

/// Fallback tag some mappers use instead of `dog`.
const PETS_FILTER: &str = r#"["pets"="yes"]"#;

/// Query for veterinary clinics around the origin.
#[must_use]
pub fn veterinary_query(origin: GeoPoint, radius_m: u32) -> String {
    assemble(&[r#"["amenity"="veterinary"]"#], origin, radius_m)
}

/// Query for pet-friendly restaurants and cafes around the origin.
///
/// In strict mode only places tagged dog- or pet-friendly match: the union
/// of restaurant and cafe clauses filtered by [`DOG_FILTER`], plus the same
/// pair filtered by [`PETS_FILTER`]. Pet-friendliness tagging in OSM is
/// inconsistent, so strict results are precise but sparse.
///
/// In non-strict mode every restaurant and cafe in range matches; callers
/// are expected to post-filter with their own rules.
#[must_use]
pub fn pet_friendly_food_query(origin: GeoPoint, radius_m: u32, strict: bool) -> String {
    if strict {
        let restaurant_dog = format!(r#"["amenity"="restaurant"]{DOG_FILTER}"#);
        let cafe_dog = format!(r#"["amenity"="cafe"]{DOG_FILTER}"#);
        let restaurant_pets = format!(r#"["amenity"="restaurant"]{PETS_FILTER}"#);
        let cafe_pets = format!(r#"["amenity"="cafe"]{PETS_FILTER}"#);
        assemble(
            &[
                restaurant_dog.as_str(),
                cafe_dog.as_str(),
                restaurant_pets.as_str(),
                cafe_pets.as_str(),
            ],
            origin,
            radius_m,
        )
    } else {
        assemble(&[r#"["amenity"~"^(restaurant|cafe)$"]"#], origin, radius_m)
    }
}

/// Builds the full query: header, one clause per (filter, element type)
/// pair, footer. No coordinate validation happens here; out-of-range values
/// are formatted as-is and rejected server-side.
fn assemble(filters: &[&str], origin: GeoPoint, radius_m: u32) -> String {
    let around = format!("(around:{},{},{})", radius_m, origin.lat, origin.lon);

    let mut clauses = String::new();
    for filter in filters {
        for element_type in ELEMENT_TYPES {
            clauses.push_str(&format!("  {element_type}{filter}{around};\n"));
        }
    }

    format!("[out:json][timeout:{SERVER_TIMEOUT_SECS}];\n(\n{clauses});\nout center tags;\n")
}
