//! Live tests against the public catalog.
//!
//! Run with `CATALOG_LIVE_TESTS=1 cargo test -p character-catalog-provider`.

mod common;

use std::collections::HashSet;

use character_catalog_provider::{CatalogError, CharacterSource};

#[tokio::test]
async fn first_page_has_records() {
    skip_unless_live!();
    let client = require_ok!(common::live_client());

    let page = require_ok!(client.fetch_page(1).await);
    assert!(!page.results.is_empty());

    let ids: HashSet<u32> = page.results.iter().map(|c| c.id).collect();
    assert_eq!(ids.len(), page.results.len(), "ids must be unique within a page");
}

#[tokio::test]
async fn consecutive_pages_do_not_overlap() {
    skip_unless_live!();
    let client = require_ok!(common::live_client());

    let first = require_ok!(client.fetch_page(1).await);
    let second = require_ok!(client.fetch_page(2).await);

    let first_ids: HashSet<u32> = first.results.iter().map(|c| c.id).collect();
    assert!(second.results.iter().all(|c| !first_ids.contains(&c.id)));
}

#[tokio::test]
async fn page_past_the_end_is_not_found() {
    skip_unless_live!();
    let client = require_ok!(common::live_client());

    let result = client.fetch_page(100_000).await;
    assert!(
        matches!(result, Err(CatalogError::PageNotFound { page: 100_000, .. })),
        "unexpected result: {result:?}"
    );
}
