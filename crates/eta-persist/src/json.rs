//! JSON persistence backend.
//!
//! # Format
//!
//! A single JSON array, one object per collection, in display order:
//!
//! ```json
//! [
//!   { "name": "commute",  "list": ["kmb/970X+1/3", "ctb/A11+1/0"] },
//!   { "name": "weekend",  "list": ["nlb/36+1/1"] }
//! ]
//! ```
//!
//! `list` entries are opaque bookmark references; they round-trip untouched.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use eta_collection::{RouteCollection, validate_unique_names};

use crate::writer::CollectionWriter;
use crate::{PersistError, PersistResult};

// ── Loading ───────────────────────────────────────────────────────────────────

/// Load the collection sequence from a JSON file.
///
/// A missing file is treated as an empty sequence (first run).
///
/// # Errors
///
/// Returns `PersistError::Json` on malformed input and
/// `PersistError::Invalid` when two collections share a name — the
/// uniqueness invariant is enforced at this boundary so the store never has
/// to re-check it.
pub fn load_collections(path: &Path) -> PersistResult<Vec<RouteCollection>> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(PersistError::Io(e)),
    };
    load_collections_reader(file)
}

/// Like [`load_collections`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for platform layers that
/// store the JSON somewhere other than a file.
pub fn load_collections_reader<R: Read>(reader: R) -> PersistResult<Vec<RouteCollection>> {
    let collections: Vec<RouteCollection> = serde_json::from_reader(reader)?;
    validate_unique_names(&collections)?;
    Ok(collections)
}

// ── Saving ────────────────────────────────────────────────────────────────────

/// Serialize `collections` as a JSON array into any `Write` sink.
pub fn save_collections_writer<W: Write>(
    writer: W,
    collections: &[RouteCollection],
) -> PersistResult<()> {
    serde_json::to_writer_pretty(writer, collections)?;
    Ok(())
}

/// File-backed [`CollectionWriter`] that rewrites the target path on every
/// save.
///
/// Writes go to a sibling temp file which is then renamed over the target, so
/// a crash mid-save never leaves a truncated collections file behind.
pub struct JsonWriter {
    path: PathBuf,
}

impl JsonWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CollectionWriter for JsonWriter {
    fn save(&mut self, collections: &[RouteCollection]) -> PersistResult<()> {
        let tmp = self.path.with_extension("json.tmp");
        {
            let mut file = File::create(&tmp)?;
            save_collections_writer(&mut file, collections)?;
            file.flush()?;
        }
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
