//! # character-catalog-provider
//!
//! Typed access to the public character catalog API.
//!
//! The catalog exposes a single paginated listing,
//! `GET {base_url}/character?page={n}`, returning
//! `{ "info": {...}, "results": [Character, ...] }`. This crate models those
//! records, maps HTTP failures onto [`CatalogError`], and hides the transport
//! behind the [`CharacterSource`] trait so callers can substitute their own
//! source.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use character_catalog_provider::{CatalogClient, CharacterSource, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CatalogClient::new(ClientConfig::default())?;
//!     let page = client.fetch_page(1).await?;
//!     for character in &page.results {
//!         println!("{} ({})", character.name, character.status);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Transient failures ([`CatalogError::NetworkError`], [`CatalogError::Timeout`],
//! [`CatalogError::RateLimited`]) are retried only when
//! [`ClientConfig::max_retries`] is non-zero. A request past the last page
//! yields [`CatalogError::PageNotFound`].

mod client;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

pub use client::{CatalogClient, ClientConfig, DEFAULT_BASE_URL};
pub use error::{CatalogError, Result};
pub use traits::CharacterSource;
pub use types::{Character, CharacterPage, CharacterStatus, PageInfo};
