//! Retry with exponential backoff for transient Overpass failures.
//!
//! The public Overpass instances are shared infrastructure and shed load
//! with 429/5xx responses under pressure. Those, plus network-level
//! failures, are retried with doubling delays. Everything else (malformed
//! query, auth problems, unparseable body) is propagated immediately —
//! retrying cannot fix it.

use std::future::Future;
use std::time::Duration;

use crate::error::OverpassError;

/// Returns `true` if `err` represents a transient condition that should be
/// retried after a backoff delay.
///
/// Retriable errors:
/// - [`OverpassError::TransientStatus`] — 429/502/503/504; the server is
///   rate limiting or briefly unavailable.
/// - [`OverpassError::Http`] — network-level failure (connection reset,
///   timeout, etc.).
///
/// Non-retriable errors (propagated immediately):
/// - [`OverpassError::UnexpectedStatus`] — e.g. 400 for a malformed query;
///   retrying returns the same answer.
/// - [`OverpassError::Deserialize`] — response body does not parse.
/// - [`OverpassError::InvalidMode`] — caller error, never reaches the wire.
fn is_transient(err: &OverpassError) -> bool {
    matches!(
        err,
        OverpassError::TransientStatus { .. } | OverpassError::Http(_)
    )
}

/// Executes `operation` up to `max_attempts` times, sleeping
/// `backoff_base_ms * 2^(n-1)` milliseconds before retry *n*.
///
/// On success the result is returned immediately. A non-transient error is
/// returned as-is without further attempts. When the attempt budget is
/// exhausted the last transient error is wrapped in
/// [`OverpassError::RetriesExhausted`].
///
/// `max_attempts` counts the first try; a value of 0 is treated as 1.
/// The doubling is uncapped apart from an overflow guard on the shift.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_attempts: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, OverpassError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, OverpassError>>,
{
    let budget = max_attempts.max(1);
    let mut attempt = 0u32;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                attempt += 1;
                if !is_transient(&err) {
                    return Err(err);
                }
                if attempt >= budget {
                    return Err(OverpassError::RetriesExhausted {
                        attempts: attempt,
                        source: Box::new(err),
                    });
                }
                let delay_ms = backoff_base_ms.saturating_mul(1u64 << (attempt - 1).min(62));
                tracing::warn!(
                    attempt,
                    max_attempts = budget,
                    delay_ms,
                    error = %err,
                    "transient Overpass error — retrying after backoff"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}
