//! `eta-collection` — the ordered, named collection manager.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                      |
//! |----------------|---------------------------------------------------------------|
//! | [`collection`] | `RouteCollection` — a user-named, ordered bookmark group      |
//! | [`reorder`]    | Pure array-move function used by the store                    |
//! | [`drag`]       | `DropEvent` — abstract drag-gesture outcome                   |
//! | [`store`]      | `CollectionStore` — single source of truth for the sequence   |
//! | [`observer`]   | `CollectionObserver` trait, `NoopObserver`                    |
//! | [`error`]      | `CollectionError`, `CollectionResult<T>`                      |
//!
//! # Design notes
//!
//! Everything here is single-threaded and event-driven: mutations happen in
//! response to discrete user events (drop, click, dialog resolution) and each
//! one is atomic from the caller's perspective.  Deletion is a two-phase
//! protocol — `request_delete` records a pending index and asks the outside
//! world to confirm; `confirm_delete`/`cancel_delete` resolve it.  A second
//! request before resolution simply retargets the pending index
//! (last-request-wins; there is only one confirmation dialog at a time).

pub mod collection;
pub mod drag;
pub mod error;
pub mod observer;
pub mod reorder;
pub mod store;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use collection::{RouteCollection, collection_names_unique, validate_unique_names};
pub use drag::DropEvent;
pub use error::{CollectionError, CollectionResult};
pub use observer::{CollectionObserver, NoopObserver};
pub use reorder::reorder;
pub use store::CollectionStore;
