//! `PersistObserver<W>` — bridges `CollectionObserver` to a `CollectionWriter`.

use std::cell::RefCell;
use std::rc::Rc;

use eta_collection::{CollectionObserver, RouteCollection};

use crate::writer::CollectionWriter;
use crate::{PersistError, PersistResult};

/// A [`CollectionObserver`] that rewrites the persisted sequence after every
/// confirmed mutation (reorder or deletion).
///
/// Delete *requests* are deliberately not persisted — nothing has changed
/// until the confirmation dialog resolves.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  The observer is a cheap handle over shared state:
/// keep a [`clone`](Clone::clone) before boxing one copy into
/// `CollectionStore::subscribe`, then poll [`take_error`][Self::take_error]
/// on the retained handle.
///
/// ```rust,ignore
/// let persist = PersistObserver::new(JsonWriter::new("collections.json"));
/// store.subscribe(Box::new(persist.clone()));
/// // …event loop…
/// if let Some(e) = persist.take_error() {
///     eprintln!("save failed: {e}");
/// }
/// ```
pub struct PersistObserver<W: CollectionWriter> {
    inner: Rc<RefCell<Inner<W>>>,
}

struct Inner<W> {
    writer:     W,
    last_error: Option<PersistError>,
}

impl<W: CollectionWriter> PersistObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner { writer, last_error: None })),
        }
    }

    /// Take the stored save error (if any).  Returns `None` if every save so
    /// far succeeded.  Only the first error is kept.
    pub fn take_error(&self) -> Option<PersistError> {
        self.inner.borrow_mut().last_error.take()
    }

    /// Run `f` with access to the inner writer (e.g. to inspect its target
    /// path or recorded state after a session).
    pub fn with_writer<T>(&self, f: impl FnOnce(&W) -> T) -> T {
        f(&self.inner.borrow().writer)
    }

    fn save(&self, collections: &[RouteCollection]) {
        let mut inner = self.inner.borrow_mut();
        let result: PersistResult<()> = inner.writer.save(collections);
        if let Err(e) = result {
            // Keep only the first error.
            if inner.last_error.is_none() {
                inner.last_error = Some(e);
            }
        }
    }
}

impl<W: CollectionWriter> Clone for PersistObserver<W> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<W: CollectionWriter> CollectionObserver for PersistObserver<W> {
    fn on_order_changed(&mut self, order: &[RouteCollection]) {
        self.save(order);
    }

    fn on_collection_removed(&mut self, _removed: &RouteCollection, remaining: &[RouteCollection]) {
        self.save(remaining);
    }
}
