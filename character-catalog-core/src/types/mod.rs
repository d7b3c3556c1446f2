//! Core type definitions

mod query;

pub use query::{SortDirection, StatusFilter, ViewQuery};

// Re-export library types
pub use character_catalog_provider::{Character, CharacterPage, CharacterStatus, PageInfo};
