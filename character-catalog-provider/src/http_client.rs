//! Shared HTTP plumbing
//!
//! Sending, logging and status triage live here so the catalog client only
//! builds URLs and interprets bodies.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::CatalogError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP helper functions
pub struct HttpUtils;

impl HttpUtils {
    /// Send a request and return the status code with the response text.
    ///
    /// HTTP 429 becomes [`CatalogError::RateLimited`] and 502/503/504 become
    /// [`CatalogError::NetworkError`]; every other status is handed back to the
    /// caller for interpretation.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        source_name: &str,
        url: &str,
    ) -> Result<(u16, String), CatalogError> {
        log::debug!("[{source_name}] GET {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                CatalogError::Timeout {
                    source_name: source_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                CatalogError::NetworkError {
                    source_name: source_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{source_name}] Response Status: {status_code}");

        // Read before the body consumes the response
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status_code == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{source_name}] Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(CatalogError::RateLimited {
                source_name: source_name.to_string(),
                retry_after,
                raw_message: Some(body),
            });
        }

        if matches!(status_code, 502..=504) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{source_name}] Server error (HTTP {status_code})");
            return Err(CatalogError::NetworkError {
                source_name: source_name.to_string(),
                detail: format!("HTTP {status_code}: {}", truncate_for_log(&body)),
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| CatalogError::NetworkError {
                source_name: source_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{source_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse a JSON body into `T`, mapping failures to [`CatalogError::ParseError`].
    pub fn parse_json<T>(response_text: &str, source_name: &str) -> Result<T, CatalogError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{source_name}] JSON parse failed: {e}");
            log::error!(
                "[{source_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            CatalogError::ParseError {
                source_name: source_name.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Like [`execute_request`](Self::execute_request), retrying transient failures.
    ///
    /// Only [`CatalogError::is_retryable`] errors are retried. The delay doubles
    /// from 100ms up to 10s; a `Retry-After` hint takes precedence, capped at 30s.
    /// `max_retries == 0` sends exactly once.
    pub async fn execute_request_with_retry(
        request_builder: RequestBuilder,
        source_name: &str,
        url: &str,
        max_retries: u32,
    ) -> Result<(u16, String), CatalogError> {
        if max_retries == 0 {
            return Self::execute_request(request_builder, source_name, url).await;
        }

        let mut last_error = None;

        for attempt in 0..=max_retries {
            // RequestBuilder is single-use
            let Some(req) = request_builder.try_clone() else {
                log::warn!("[{source_name}] Cannot clone request, disabling retry");
                return Self::execute_request(request_builder, source_name, url).await;
            };

            match Self::execute_request(req, source_name, url).await {
                Ok(resp) => return Ok(resp),
                Err(e) if attempt < max_retries && e.is_retryable() => {
                    let delay = retry_delay(&e, attempt);
                    log::warn!(
                        "[{}] Request failed (attempt {}/{}), retrying in {:.1}s: {}",
                        source_name,
                        attempt + 1,
                        max_retries,
                        delay.as_secs_f32(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| CatalogError::NetworkError {
            source_name: source_name.to_string(),
            detail: "All retries exhausted with no error captured".to_string(),
        }))
    }
}

/// Delay before the next attempt.
///
/// A `Retry-After` hint on [`CatalogError::RateLimited`] wins (capped at 30s);
/// otherwise exponential backoff.
fn retry_delay(error: &CatalogError, attempt: u32) -> Duration {
    if let CatalogError::RateLimited {
        retry_after: Some(secs),
        ..
    } = error
    {
        Duration::from_secs((*secs).min(30))
    } else {
        backoff_delay(attempt)
    }
}

/// 100ms, 200ms, 400ms, ... capped at 10s.
fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20);
    let delay_ms = 100_u64.saturating_mul(1_u64 << capped_attempt);
    Duration::from_millis(delay_ms.min(10_000))
}
