use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";
pub const DEFAULT_USER_AGENT: &str = "pawmap/0.1 (nearby-places; contact: ops@pawmap.dev)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse. No variables are
/// required; everything has a default.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let overpass_url = or_default("PAWMAP_OVERPASS_URL", DEFAULT_OVERPASS_URL);
    let user_agent = or_default("PAWMAP_USER_AGENT", DEFAULT_USER_AGENT);
    let log_level = or_default("PAWMAP_LOG_LEVEL", "info");

    let request_timeout_secs = parse_u64("PAWMAP_REQUEST_TIMEOUT_SECS", "45")?;
    let max_attempts = parse_u32("PAWMAP_MAX_ATTEMPTS", "6")?;
    let backoff_base_ms = parse_u64("PAWMAP_BACKOFF_BASE_MS", "1250")?;
    let default_radius_m = parse_u32("PAWMAP_DEFAULT_RADIUS_M", "1500")?;
    let default_top_n = parse_usize("PAWMAP_DEFAULT_TOP_N", "20")?;

    Ok(AppConfig {
        overpass_url,
        user_agent,
        log_level,
        request_timeout_secs,
        max_attempts,
        backoff_base_ms,
        default_radius_m,
        default_top_n,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.overpass_url, DEFAULT_OVERPASS_URL);
        assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.request_timeout_secs, 45);
        assert_eq!(cfg.max_attempts, 6);
        assert_eq!(cfg.backoff_base_ms, 1250);
        assert_eq!(cfg.default_radius_m, 1500);
        assert_eq!(cfg.default_top_n, 20);
    }

    #[test]
    fn build_app_config_overrides_endpoint_and_agent() {
        let mut map = HashMap::new();
        map.insert("PAWMAP_OVERPASS_URL", "http://localhost:12345/api/interpreter");
        map.insert("PAWMAP_USER_AGENT", "pawmap-test/0.0");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.overpass_url, "http://localhost:12345/api/interpreter");
        assert_eq!(cfg.user_agent, "pawmap-test/0.0");
    }

    #[test]
    fn build_app_config_parses_numeric_overrides() {
        let mut map = HashMap::new();
        map.insert("PAWMAP_MAX_ATTEMPTS", "3");
        map.insert("PAWMAP_BACKOFF_BASE_MS", "10");
        map.insert("PAWMAP_DEFAULT_TOP_N", "5");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.max_attempts, 3);
        assert_eq!(cfg.backoff_base_ms, 10);
        assert_eq!(cfg.default_top_n, 5);
    }

    #[test]
    fn build_app_config_rejects_invalid_max_attempts() {
        let mut map = HashMap::new();
        map.insert("PAWMAP_MAX_ATTEMPTS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PAWMAP_MAX_ATTEMPTS"),
            "expected InvalidEnvVar(PAWMAP_MAX_ATTEMPTS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_rejects_invalid_timeout() {
        let mut map = HashMap::new();
        map.insert("PAWMAP_REQUEST_TIMEOUT_SECS", "45s");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PAWMAP_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(PAWMAP_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_rejects_negative_radius() {
        let mut map = HashMap::new();
        map.insert("PAWMAP_DEFAULT_RADIUS_M", "-500");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PAWMAP_DEFAULT_RADIUS_M"),
            "expected InvalidEnvVar(PAWMAP_DEFAULT_RADIUS_M), got: {result:?}"
        );
    }
}
