//! `eta-view` — framework-free view contracts over the collection store and
//! the ETA source.
//!
//! Nothing here draws pixels.  Each view reduces state to a small render
//! model (`ListRender`, `ArrivalRender`, `RouteHeader`, `TimetableRender`)
//! that a UI shell maps onto whatever widget toolkit it uses, and routes user
//! actions back to [`CollectionStore`][eta_collection::CollectionStore].
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`list`]      | `CollectionListView`, `ManageMode`, `ListRender`          |
//! | [`arrival`]   | `ArrivalDisplayView`, `EtaSource`, `ArrivalRender`        |
//! | [`header`]    | `route_header` — route number + terminus labels           |
//! | [`timetable`] | `timetable_rows` — flattened frequency table              |

pub mod arrival;
pub mod header;
pub mod list;
pub mod timetable;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use arrival::{ArrivalDisplayView, ArrivalRender, EtaSource};
pub use header::{RouteHeader, route_header};
pub use list::{CollectionListView, ListItem, ListRender, ManageMode, empty_list_message};
pub use timetable::{TimetableRender, TimetableRow, timetable_rows};
