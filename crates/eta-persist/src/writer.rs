//! The `CollectionWriter` trait implemented by all persistence backends.

use eta_collection::RouteCollection;

use crate::PersistResult;

/// Trait implemented by persistence backends (JSON file today; the
/// application's platform layer may supply its own).
///
/// `save` always receives the **full** current sequence — the format is small
/// enough that rewriting it whole keeps the backend stateless with respect to
/// individual mutations.
pub trait CollectionWriter {
    /// Persist the complete current sequence.
    fn save(&mut self, collections: &[RouteCollection]) -> PersistResult<()>;

    /// Flush and release any underlying resources.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> PersistResult<()> {
        Ok(())
    }
}
