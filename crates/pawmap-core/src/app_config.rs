/// Application configuration resolved from the environment.
///
/// Every field has a default: the public Overpass instance requires no API
/// key, so a bare process with no `.env` still works. Construct via
/// [`crate::config::load_app_config`] rather than ambient globals so tests
/// and concurrent callers can carry their own values.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Overpass interpreter endpoint to POST queries to.
    pub overpass_url: String,
    /// Identifying `User-Agent` sent with every request. Public Overpass
    /// operators ask for a contact address in this string.
    pub user_agent: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    /// Total attempt budget per query, including the first try.
    pub max_attempts: u32,
    /// Base delay for exponential backoff between attempts.
    pub backoff_base_ms: u64,
    pub default_radius_m: u32,
    pub default_top_n: usize,
}
