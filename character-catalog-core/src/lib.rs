//! Character Catalog Core Library
//!
//! Platform-independent list logic for the character catalog:
//! - filter/sort pipeline over the owned collection ([`view`])
//! - incremental pagination with an at-most-one-in-flight guard ([`services::PageLoader`])
//! - merge-by-id and container-owned collection edits ([`collection`])
//! - the selection/overlay state machine ([`selection`])
//!
//! Front ends own a [`CharacterCollection`] and feed it [`CollectionEdit`]s and
//! loaded pages; nothing in this crate keeps a second writable copy.

pub mod collection;
pub mod error;
pub mod liveness;
pub mod pagination;
pub mod selection;
pub mod services;
pub mod types;
pub mod view;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export common types
pub use collection::{merge_by_id, CharacterCollection, CollectionEdit};
pub use error::{CoreError, CoreResult};
pub use liveness::LivenessToken;
pub use pagination::PaginationCursor;
pub use selection::{Overlay, SelectionState};
pub use services::{LoadOutcome, PageLoader};
pub use view::{derive_view, ViewCache};
