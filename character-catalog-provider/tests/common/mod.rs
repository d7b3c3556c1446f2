//! Shared helpers for live catalog tests

#![allow(dead_code)]

use std::env;
use std::time::Duration;

use character_catalog_provider::{CatalogClient, ClientConfig, DEFAULT_BASE_URL, Result};

/// Skip the current test unless live API tests are enabled.
#[macro_export]
macro_rules! skip_unless_live {
    () => {
        if std::env::var("CATALOG_LIVE_TESTS").is_err() {
            eprintln!("skipping live test: CATALOG_LIVE_TESTS is not set");
            return;
        }
    };
}

/// Assert a `Result` is `Ok` and unwrap it (returns from the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Client pointed at `CATALOG_BASE_URL`, or the public API.
pub fn live_client() -> Result<CatalogClient> {
    let base_url = env::var("CATALOG_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    CatalogClient::new(ClientConfig {
        base_url,
        timeout: Some(Duration::from_secs(20)),
        max_retries: 2,
    })
}
