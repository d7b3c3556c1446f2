//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use character_catalog_provider::CatalogError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// No record with this id in the collection
    #[error("Record not found: {0}")]
    RecordNotFound(u32),

    /// Invalid user input (unknown filter value, empty name, ...)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Catalog API error (converting from library)
    #[error("{0}")]
    Catalog(#[from] CatalogError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, missing record, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::RecordNotFound(_) | Self::ValidationError(_) => true,
            Self::Catalog(e) => e.is_expected(),
            _ => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_errors_convert() {
        let err: CoreError = CatalogError::PageNotFound {
            source_name: "catalog".to_string(),
            page: 9,
        }
        .into();
        assert!(matches!(err, CoreError::Catalog(_)));
        assert!(err.is_expected());
        assert_eq!(err.to_string(), "[catalog] Page 9 not found");
    }

    #[test]
    fn storage_errors_are_unexpected() {
        assert!(!CoreError::StorageError("disk full".to_string()).is_expected());
        assert!(CoreError::RecordNotFound(5).is_expected());
    }
}
