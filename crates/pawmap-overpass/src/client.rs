use std::time::Duration;

use pawmap_core::AppConfig;
use reqwest::Client;

use crate::error::OverpassError;
use crate::retry::retry_with_backoff;
use crate::types::OverpassResponse;

/// HTTP statuses the shared Overpass instances return under load. All of
/// them mean "try again later", not "your query is wrong".
const TRANSIENT_STATUSES: [u16; 4] = [429, 502, 503, 504];

/// HTTP client for an Overpass `/api/interpreter` endpoint.
///
/// Queries go out as form-encoded POSTs (`data=<query>`) with an
/// identifying `User-Agent`, the way the public instances ask bots to
/// behave. Transient failures (429/502/503/504, network errors) are retried
/// with exponential backoff up to `max_attempts` total attempts; any other
/// non-2xx status or an unparseable body fails immediately.
///
/// The client holds no mutable state and is cheap to share across tasks.
pub struct OverpassClient {
    client: Client,
    endpoint_url: String,
    /// Total attempt budget per query, including the first try.
    max_attempts: u32,
    /// Base delay in milliseconds for exponential backoff:
    /// `backoff_base_ms * 2^(n-1)` before retry *n*.
    backoff_base_ms: u64,
}

impl OverpassClient {
    /// Creates an `OverpassClient` with configured endpoint, timeout,
    /// `User-Agent`, and retry policy.
    ///
    /// The timeout applies per attempt and does not escalate across
    /// retries.
    ///
    /// # Errors
    ///
    /// Returns [`OverpassError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        endpoint_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_attempts: u32,
        backoff_base_ms: u64,
    ) -> Result<Self, OverpassError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            endpoint_url: endpoint_url.to_owned(),
            max_attempts,
            backoff_base_ms,
        })
    }

    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, OverpassError> {
        Self::new(
            &config.overpass_url,
            config.request_timeout_secs,
            &config.user_agent,
            config.max_attempts,
            config.backoff_base_ms,
        )
    }

    /// Executes one Overpass QL query and returns the parsed response.
    ///
    /// # Errors
    ///
    /// - [`OverpassError::RetriesExhausted`] — every attempt hit a
    ///   transient status (429/502/503/504) or a network failure; wraps the
    ///   last cause.
    /// - [`OverpassError::UnexpectedStatus`] — any other non-2xx status,
    ///   e.g. 400 for a malformed query (not retried).
    /// - [`OverpassError::Deserialize`] — response body is not valid JSON
    ///   or does not match the expected shape (not retried).
    pub async fn execute(&self, query: &str) -> Result<OverpassResponse, OverpassError> {
        retry_with_backoff(self.max_attempts, self.backoff_base_ms, || {
            let query = query.to_owned();
            async move {
                let response = self
                    .client
                    .post(&self.endpoint_url)
                    .header(reqwest::header::ACCEPT, "application/json")
                    .form(&[("data", query.as_str())])
                    .send()
                    .await?;

                let status = response.status().as_u16();
                if TRANSIENT_STATUSES.contains(&status) {
                    return Err(OverpassError::TransientStatus { status });
                }
                if !response.status().is_success() {
                    return Err(OverpassError::UnexpectedStatus { status });
                }

                let body = response.text().await?;
                let parsed = serde_json::from_str::<OverpassResponse>(&body)
                    .map_err(|e| OverpassError::Deserialize { source: e })?;

                tracing::debug!(elements = parsed.elements.len(), "Overpass query returned");
                Ok(parsed)
            }
        })
        .await
    }
}
