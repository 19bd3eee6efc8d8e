//! Collection error type.
//!
//! Store operations themselves degrade silently on bad indices (drag
//! libraries produce out-of-bounds drops as a matter of course), so these
//! variants surface only at validation boundaries such as the persistence
//! loader.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("duplicate collection name {0:?}")]
    DuplicateName(String),
}

pub type CollectionResult<T> = Result<T, CollectionError>;
