//! `eta-persist` — the persistence collaborator for bookmark collections.
//!
//! The on-disk format is a JSON array of `{ "name": …, "list": […] }`
//! objects, loaded once at session start and rewritten after every confirmed
//! mutation (reorder or deletion — never on a mere delete *request*).
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`json`]     | `load_collections*` functions, `JsonWriter` backend        |
//! | [`writer`]   | `CollectionWriter` trait implemented by all backends       |
//! | [`observer`] | `PersistObserver` — saves on every confirmed store change  |
//! | [`error`]    | `PersistError`, `PersistResult<T>`                         |
//!
//! Name uniqueness across collections is enforced **here**, at the load
//! boundary; the store treats it as an upheld precondition.

pub mod error;
pub mod json;
pub mod observer;
pub mod writer;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{PersistError, PersistResult};
pub use json::{JsonWriter, load_collections, load_collections_reader, save_collections_writer};
pub use observer::PersistObserver;
pub use writer::CollectionWriter;
