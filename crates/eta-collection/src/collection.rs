//! The `RouteCollection` — one user-named, ordered group of bookmarks.

use serde::{Deserialize, Serialize};

use crate::{CollectionError, CollectionResult};

/// A user-named, ordered group of route/stop bookmarks.
///
/// `name` doubles as the display label and the stable key for list rendering,
/// so it must be unique across the sequence held by
/// [`CollectionStore`][crate::CollectionStore].  That uniqueness is a
/// precondition upheld by the persistence layer at load time
/// (`eta-persist`), not re-checked on every store operation.
///
/// `list` entries are opaque bookmark references (route + stop encoded by the
/// application); this crate only ever observes `list.len()`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct RouteCollection {
    pub name: String,
    pub list: Vec<String>,
}

/// Check the name-uniqueness invariant, reporting the first duplicate.
///
/// Quadratic, but the sequence is user-curated and small (tens of entries).
/// The persistence loader calls this at the load boundary; store operations
/// rely on it only through debug assertions.
pub fn validate_unique_names(collections: &[RouteCollection]) -> CollectionResult<()> {
    for (i, c) in collections.iter().enumerate() {
        if collections[..i].iter().any(|prev| prev.name == c.name) {
            return Err(CollectionError::DuplicateName(c.name.clone()));
        }
    }
    Ok(())
}

/// `true` when no two collections share a name.
pub fn collection_names_unique(collections: &[RouteCollection]) -> bool {
    validate_unique_names(collections).is_ok()
}

impl RouteCollection {
    pub fn new(name: impl Into<String>, list: Vec<String>) -> Self {
        Self { name: name.into(), list }
    }

    /// Number of bookmarked entries — shown as the "Number of ETAs" caption.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}
