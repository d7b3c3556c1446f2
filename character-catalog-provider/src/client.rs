//! HTTP client for the public character catalog

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{CatalogError, Result};
use crate::http_client::HttpUtils;
use crate::traits::CharacterSource;
use crate::types::CharacterPage;

/// Default API root of the public catalog.
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

const SOURCE_NAME: &str = "catalog";

/// Client construction options.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, without the `/character` suffix.
    pub base_url: String,
    /// Per-request timeout. `None` lets a hung request wait forever.
    pub timeout: Option<Duration>,
    /// Retries for transient failures. `0` disables retrying.
    pub max_retries: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            max_retries: 0,
        }
    }
}

/// Reads `GET {base_url}/character?page={n}`.
#[derive(Debug)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
    max_retries: u32,
}

impl CatalogClient {
    /// Build a client from `config`.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| CatalogError::NetworkError {
            source_name: SOURCE_NAME.to_string(),
            detail: format!("Failed to build HTTP client: {e}"),
        })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_retries: config.max_retries,
        })
    }

    /// URL of the given listing page.
    pub fn page_url(&self, page: u32) -> String {
        format!("{}/character?page={page}", self.base_url)
    }
}

#[async_trait]
impl CharacterSource for CatalogClient {
    fn id(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn fetch_page(&self, page: u32) -> Result<CharacterPage> {
        let url = self.page_url(page);
        let request = self.client.get(&url);

        let (status, body) =
            HttpUtils::execute_request_with_retry(request, SOURCE_NAME, &url, self.max_retries)
                .await?;

        match status {
            200..=299 => HttpUtils::parse_json(&body, SOURCE_NAME),
            404 => Err(CatalogError::PageNotFound {
                source_name: SOURCE_NAME.to_string(),
                page,
            }),
            _ => Err(CatalogError::HttpStatus {
                source_name: SOURCE_NAME.to_string(),
                status,
                raw_message: body,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_uses_character_endpoint() {
        let client = CatalogClient::new(ClientConfig::default()).unwrap();
        assert_eq!(
            client.page_url(3),
            "https://rickandmortyapi.com/api/character?page=3"
        );
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = CatalogClient::new(ClientConfig {
            base_url: "http://localhost:8080/api/".to_string(),
            ..ClientConfig::default()
        })
        .unwrap();
        assert_eq!(client.page_url(1), "http://localhost:8080/api/character?page=1");
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        // Port 9 (discard) on loopback is closed on any sane test host
        let client = CatalogClient::new(ClientConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout: Some(Duration::from_secs(5)),
            max_retries: 0,
        })
        .unwrap();
        let result = client.fetch_page(1).await;
        assert!(
            matches!(
                result,
                Err(CatalogError::NetworkError { .. } | CatalogError::Timeout { .. })
            ),
            "unexpected result: {result:?}"
        );
    }
}
