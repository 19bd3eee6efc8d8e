//! Abstract drag-gesture outcome.
//!
//! The store must not depend on any specific drag library, so gesture
//! backends reduce a finished drag to this event and hand it to
//! [`CollectionStore::apply_drop`][crate::CollectionStore::apply_drop].

/// The outcome of one completed drag gesture over the collection list.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct DropEvent {
    /// Index the dragged item started at.
    pub source: usize,

    /// Index the item was dropped at, or `None` when the drop landed outside
    /// every valid target (the gesture is then a no-op).
    pub destination: Option<usize>,
}

impl DropEvent {
    pub fn new(source: usize, destination: Option<usize>) -> Self {
        Self { source, destination }
    }
}
