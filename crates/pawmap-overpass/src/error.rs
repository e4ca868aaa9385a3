use thiserror::Error;

#[derive(Debug, Error)]
pub enum OverpassError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("transient HTTP status {status} from Overpass")]
    TransientStatus { status: u16 },

    #[error("unexpected HTTP status {status} from Overpass")]
    UnexpectedStatus { status: u16 },

    #[error("JSON deserialization error for Overpass response: {source}")]
    Deserialize {
        #[source]
        source: serde_json::Error,
    },

    #[error("Overpass request failed after {attempts} attempts: {source}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        source: Box<OverpassError>,
    },

    #[error("mode must be 'veterinary' or 'pet_friendly_food', got \"{0}\"")]
    InvalidMode(String),
}
