//! The collection list view: reorder mode and delete-marking mode.

use eta_collection::{CollectionStore, DropEvent};
use eta_core::Lang;

// ── Mode and render model ─────────────────────────────────────────────────────

/// Which interaction the list currently offers.  Supplied by the caller on
/// every render/action — the view never owns it.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ManageMode {
    /// Items are drag-enabled; drops reorder the sequence.
    Order,
    /// Items expose a delete action instead of a drag handle.
    Delete,
}

/// One row of the rendered list.  `name` doubles as the stable row key.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ListItem {
    pub name:         String,
    /// Bookmark count, shown as the "Number of ETAs" caption.
    pub entry_count:  usize,
    pub drag_enabled: bool,
    pub deletable:    bool,
}

/// What the UI shell should draw.
///
/// An empty sequence renders as an explicit empty-state message, never as a
/// zero-row list — the distinction is observable and tested.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ListRender {
    Empty { message: &'static str },
    Items(Vec<ListItem>),
}

/// The designated empty-state message, per display language.
pub fn empty_list_message(lang: Lang) -> &'static str {
    match lang {
        Lang::Zh => "未有收藏。",
        Lang::En => "No collections yet.",
    }
}

// ── CollectionListView ────────────────────────────────────────────────────────

/// Renders the store's ordered sequence and routes user actions back to it.
///
/// The view keeps a working snapshot of `(name, entry_count)` rows plus the
/// store version it came from; [`sync`][Self::sync] re-derives the snapshot
/// whenever the store has moved on — including after deletions confirmed
/// outside this view, not just on initial construction.
pub struct CollectionListView {
    rows:           Vec<(String, usize)>,
    synced_version: u64,
}

impl CollectionListView {
    /// Build a view with a snapshot of the store's current sequence.
    pub fn new(store: &CollectionStore) -> Self {
        let mut view = Self { rows: Vec::new(), synced_version: 0 };
        view.resnapshot(store);
        view
    }

    /// Re-derive the working snapshot if the store has changed since the
    /// last sync.  Returns `true` when the snapshot was refreshed.
    pub fn sync(&mut self, store: &CollectionStore) -> bool {
        if store.version() == self.synced_version {
            return false;
        }
        self.resnapshot(store);
        true
    }

    /// Produce the render model for `mode`.
    pub fn render(&self, mode: ManageMode, lang: Lang) -> ListRender {
        if self.rows.is_empty() {
            return ListRender::Empty { message: empty_list_message(lang) };
        }
        ListRender::Items(
            self.rows
                .iter()
                .map(|(name, entry_count)| ListItem {
                    name:         name.clone(),
                    entry_count:  *entry_count,
                    drag_enabled: mode == ManageMode::Order,
                    deletable:    mode == ManageMode::Delete,
                })
                .collect(),
        )
    }

    /// A drag gesture finished.  Only meaningful in [`ManageMode::Order`];
    /// in delete mode items are not draggable and the event is ignored.
    /// Returns `true` when the store's order actually changed.
    pub fn handle_drop(
        &mut self,
        store: &mut CollectionStore,
        mode:  ManageMode,
        event: DropEvent,
    ) -> bool {
        if mode != ManageMode::Order {
            return false;
        }
        let changed = store.apply_drop(event);
        if changed {
            self.resnapshot(store);
        }
        changed
    }

    /// The delete affordance on row `index` was activated.  Only meaningful
    /// in [`ManageMode::Delete`]; forwards to the store's two-phase delete
    /// (the sequence does not change until the dialog confirms).
    pub fn delete_clicked(
        &self,
        store: &mut CollectionStore,
        mode:  ManageMode,
        index: usize,
    ) -> bool {
        if mode != ManageMode::Delete {
            return false;
        }
        store.request_delete(index)
    }

    fn resnapshot(&mut self, store: &CollectionStore) {
        self.rows = store
            .collections()
            .iter()
            .map(|c| (c.name.clone(), c.len()))
            .collect();
        self.synced_version = store.version();
    }
}
