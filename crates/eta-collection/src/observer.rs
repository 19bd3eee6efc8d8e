//! Store observer trait for re-render triggers, dialogs, and persistence.

use crate::RouteCollection;

/// Callbacks invoked by [`CollectionStore`][crate::CollectionStore] after
/// each successful operation.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Typical subscribers: the view layer
/// (re-render on order change), the confirmation dialog (open on delete
/// request), and the persistence layer (save after every confirmed
/// mutation — see `eta-persist`).
///
/// # Example — change counter
///
/// ```rust,ignore
/// struct ChangeCounter { mutations: usize }
///
/// impl CollectionObserver for ChangeCounter {
///     fn on_order_changed(&mut self, _order: &[RouteCollection]) {
///         self.mutations += 1;
///     }
///     fn on_collection_removed(&mut self, _removed: &RouteCollection, _remaining: &[RouteCollection]) {
///         self.mutations += 1;
///     }
/// }
/// ```
pub trait CollectionObserver {
    /// Called after a successful reorder, with the new full order.
    fn on_order_changed(&mut self, _order: &[RouteCollection]) {}

    /// Called when deletion of the collection at `index` has been requested.
    ///
    /// This is the hook that opens the external confirmation dialog.  The
    /// sequence has **not** changed yet; the dialog resolves by calling
    /// `confirm_delete` or `cancel_delete` on the store.
    fn on_delete_requested(&mut self, _index: usize, _collection: &RouteCollection) {}

    /// Called after a confirmed deletion, with the removed collection and
    /// the remaining order.
    fn on_collection_removed(
        &mut self,
        _removed:   &RouteCollection,
        _remaining: &[RouteCollection],
    ) {
    }
}

/// A [`CollectionObserver`] that does nothing.  Use when an API requires an
/// observer but no side channel is wanted.
pub struct NoopObserver;

impl CollectionObserver for NoopObserver {}
