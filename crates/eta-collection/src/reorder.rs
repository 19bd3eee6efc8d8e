//! Pure array-move: the reorder engine behind drag-and-drop.

/// Move the element at `from` to position `to`, preserving the relative order
/// of every other element.
///
/// Returns a freshly allocated sequence; the input is never mutated (callers
/// may hold prior snapshots for comparison or animation).  `from == to`
/// returns an element-for-element copy.
///
/// # Preconditions
///
/// `from` and `to` must be in bounds.  The store guards indices before
/// calling (out-of-bounds drops are silently ignored there); violating the
/// precondition here is a caller bug.
pub fn reorder<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    debug_assert!(from < items.len(), "reorder: from {from} out of bounds");
    debug_assert!(to < items.len(), "reorder: to {to} out of bounds");

    let mut out = items.to_vec();
    let moved = out.remove(from);
    out.insert(to, moved);
    out
}
