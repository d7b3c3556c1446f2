use serde::{Deserialize, Serialize};

/// Unified error type for catalog API operations.
///
/// Each variant carries a `source_name` identifying the catalog endpoint that
/// produced it, plus variant-specific context. All variants are serializable
/// for structured error reporting.
///
/// # Retryable Errors
///
/// The following variants represent transient failures that may succeed on retry:
/// - [`NetworkError`](Self::NetworkError) — network connectivity issues
/// - [`Timeout`](Self::Timeout) — request timed out
/// - [`RateLimited`](Self::RateLimited) — API rate limit exceeded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum CatalogError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Source that produced the error.
        source_name: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Source that produced the error.
        source_name: String,
        /// Error details.
        detail: String,
    },

    /// The API rate limit has been exceeded (HTTP 429).
    RateLimited {
        /// Source that produced the error.
        source_name: String,
        /// Suggested wait time in seconds, if the API sent `Retry-After`.
        retry_after: Option<u64>,
        /// Response body, if any.
        raw_message: Option<String>,
    },

    /// The requested page does not exist (HTTP 404).
    ///
    /// The public catalog answers requests past the last page this way.
    PageNotFound {
        /// Source that produced the error.
        source_name: String,
        /// Page number that was requested.
        page: u32,
    },

    /// Any other non-success HTTP status.
    HttpStatus {
        /// Source that produced the error.
        source_name: String,
        /// HTTP status code.
        status: u16,
        /// Response body.
        raw_message: String,
    },

    /// Failed to parse the API response.
    ParseError {
        /// Source that produced the error.
        source_name: String,
        /// Details about the parse failure.
        detail: String,
    },
}

impl CatalogError {
    /// Whether this is expected behaviour rather than a fault, used for log levelling.
    ///
    /// `true` should be logged at `warn`, `false` at `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::PageNotFound { .. } | Self::RateLimited { .. })
    }

    /// Whether the request may succeed if sent again unchanged.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::Timeout { .. } | Self::RateLimited { .. }
        )
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError {
                source_name,
                detail,
            } => {
                write!(f, "[{source_name}] Network error: {detail}")
            }
            Self::Timeout {
                source_name,
                detail,
            } => {
                write!(f, "[{source_name}] Request timeout: {detail}")
            }
            Self::RateLimited {
                source_name,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{source_name}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{source_name}] Rate limited")
                }
            }
            Self::PageNotFound { source_name, page } => {
                write!(f, "[{source_name}] Page {page} not found")
            }
            Self::HttpStatus {
                source_name,
                status,
                ..
            } => {
                write!(f, "[{source_name}] Unexpected HTTP status {status}")
            }
            Self::ParseError {
                source_name,
                detail,
            } => {
                write!(f, "[{source_name}] Parse error: {detail}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Convenience type alias for `Result<T, CatalogError>`.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = CatalogError::NetworkError {
            source_name: "catalog".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[catalog] Network error: connection refused");
    }

    #[test]
    fn display_rate_limited_with_retry_after() {
        let e = CatalogError::RateLimited {
            source_name: "catalog".to_string(),
            retry_after: Some(3),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[catalog] Rate limited (retry after 3s)");
    }

    #[test]
    fn display_page_not_found() {
        let e = CatalogError::PageNotFound {
            source_name: "catalog".to_string(),
            page: 43,
        };
        assert_eq!(e.to_string(), "[catalog] Page 43 not found");
    }

    #[test]
    fn expected_classification() {
        let not_found = CatalogError::PageNotFound {
            source_name: "catalog".to_string(),
            page: 2,
        };
        let parse = CatalogError::ParseError {
            source_name: "catalog".to_string(),
            detail: "eof".to_string(),
        };
        assert!(not_found.is_expected());
        assert!(!parse.is_expected());
        assert!(!not_found.is_retryable());
        assert!(!parse.is_retryable());
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = CatalogError::HttpStatus {
            source_name: "catalog".to_string(),
            status: 500,
            raw_message: "boom".to_string(),
        };
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["code"], "HttpStatus");
        assert_eq!(json["status"], 500);
    }
}
