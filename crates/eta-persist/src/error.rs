//! Error types for eta-persist.

use thiserror::Error;

use eta_collection::CollectionError;

/// Errors that can occur when loading or saving bookmark collections.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Persisted data violates a collection invariant (duplicate names).
    #[error(transparent)]
    Invalid(#[from] CollectionError),
}

/// Alias for `Result<T, PersistError>`.
pub type PersistResult<T> = Result<T, PersistError>;
