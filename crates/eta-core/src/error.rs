//! Core error type.
//!
//! Sub-crates define their own error enums where they have richer failure
//! modes (`PersistError` in eta-persist, `CollectionError` in
//! eta-collection); `CoreError` covers the lookups shared by all of them.

use thiserror::Error;

use crate::RouteId;

/// The top-level error type for `eta-core` lookups.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("route {0} not found in route index")]
    RouteNotFound(RouteId),

    #[error("unknown operator code {0:?}")]
    UnknownOperator(String),

    #[error("ETA source error: {0}")]
    Source(String),
}

/// Shorthand result type for `eta-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
