//! The `CollectionStore` — single source of truth for the ordered sequence.

use crate::{CollectionObserver, DropEvent, RouteCollection, reorder::reorder};

/// Owns the ordered sequence of named collections and the two-phase delete
/// workflow.
///
/// There is exactly one store per session; consumers hold `&CollectionStore`
/// (or re-derive snapshots keyed on [`version`][Self::version]) rather than
/// sharing any global.  All operations are synchronous and atomic: after any
/// call the sequence is either fully updated or untouched.
///
/// # Silent no-ops
///
/// Out-of-bounds indices and drops outside a valid target are ignored
/// without error.  They arise routinely from drag-gesture edge cases and are
/// not user-visible failures.
pub struct CollectionStore {
    collections:    Vec<RouteCollection>,
    pending_delete: Option<usize>,
    version:        u64,
    observers:      Vec<Box<dyn CollectionObserver>>,
}

impl CollectionStore {
    /// Create a store over `initial` (supplied by the persistence layer).
    ///
    /// # Precondition (upheld by the loader)
    ///
    /// Collection names are unique.  `eta-persist` rejects duplicate names at
    /// load; the store itself does not re-check on every operation.
    pub fn new(initial: Vec<RouteCollection>) -> Self {
        debug_assert!(
            crate::collection_names_unique(&initial),
            "CollectionStore::new: duplicate collection names"
        );
        Self {
            collections:    initial,
            pending_delete: None,
            version:        0,
            observers:      Vec::new(),
        }
    }

    /// Register an observer.  Observers are notified in subscription order.
    pub fn subscribe(&mut self, observer: Box<dyn CollectionObserver>) {
        self.observers.push(observer);
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    /// Current ordered sequence.  No side effects.
    #[inline]
    pub fn collections(&self) -> &[RouteCollection] {
        &self.collections
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// Monotonic mutation counter.  Bumped once per successful reorder or
    /// confirmed deletion; views compare it to decide whether their working
    /// snapshot is stale.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Index awaiting confirmation, if a delete request is unresolved.
    #[inline]
    pub fn pending_delete(&self) -> Option<usize> {
        self.pending_delete
    }

    // ── Reorder ───────────────────────────────────────────────────────────

    /// Move the collection at `from` to position `to`.
    ///
    /// Returns `true` on success.  Out-of-bounds indices are a silent no-op
    /// (`false`, version unchanged, no notifications).
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let len = self.collections.len();
        if from >= len || to >= len {
            return false;
        }
        self.collections = reorder(&self.collections, from, to);
        self.version += 1;
        let observers = std::mem::take(&mut self.observers);
        self.notify(observers, |obs, s| obs.on_order_changed(&s.collections));
        true
    }

    /// Apply a finished drag gesture.  A drop outside any valid target
    /// (`destination == None`) is a no-op.
    pub fn apply_drop(&mut self, event: DropEvent) -> bool {
        match event.destination {
            Some(to) => self.reorder(event.source, to),
            None => false,
        }
    }

    // ── Two-phase delete ──────────────────────────────────────────────────

    /// Phase one: request deletion of the collection at `index`.
    ///
    /// Records the pending index and notifies observers so the external
    /// confirmation dialog opens; the sequence itself is untouched.  A second
    /// request before the first resolves retargets the pending index — only
    /// one confirmation dialog exists at a time, so last-request-wins is the
    /// contract, not a race.  Out of bounds: silent no-op.
    pub fn request_delete(&mut self, index: usize) -> bool {
        if index >= self.collections.len() {
            return false;
        }
        self.pending_delete = Some(index);
        let observers = std::mem::take(&mut self.observers);
        self.notify(observers, |obs, s| {
            obs.on_delete_requested(index, &s.collections[index]);
        });
        true
    }

    /// Phase two, confirm: remove the collection targeted by the pending
    /// request and return it.  `None` when no request is pending.
    pub fn confirm_delete(&mut self) -> Option<RouteCollection> {
        let index = self.pending_delete.take()?;
        if index >= self.collections.len() {
            return None;
        }
        let removed = self.collections.remove(index);
        self.version += 1;
        let observers = std::mem::take(&mut self.observers);
        self.notify(observers, |obs, s| {
            obs.on_collection_removed(&removed, &s.collections);
        });
        Some(removed)
    }

    /// Phase two, cancel: drop the pending request, sequence untouched.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    // ── Internal ──────────────────────────────────────────────────────────

    /// Run `f` over each observer, then put the observer list back.
    ///
    /// Observers are taken out of `self` first so they can receive `&self`
    /// borrows of the updated sequence.
    fn notify<F>(&mut self, mut observers: Vec<Box<dyn CollectionObserver>>, f: F)
    where
        F: Fn(&mut dyn CollectionObserver, &Self),
    {
        for obs in observers.iter_mut() {
            f(obs.as_mut(), self);
        }
        self.observers = observers;
    }
}
