//! `eta-core` — foundational types for the `eta_board` bookmark manager.
//!
//! This crate is a dependency of every other `eta-*` crate.  It intentionally
//! has no `eta-*` dependencies and minimal external ones (`serde`,
//! `thiserror`, and `rustc-hash` for the route index).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `Operator`, `RouteId`, `StopId`, `StopKey`            |
//! | [`lang`]    | `Lang`, `LangText`, `to_proper_case`                  |
//! | [`route`]   | `RouteInfo`, `Timetable`, `RouteIndex`                |
//! | [`eta`]     | `Eta`, `ArrivalEntry`                                 |
//! | [`error`]   | `CoreError`, `CoreResult`                             |

pub mod error;
pub mod eta;
pub mod ids;
pub mod lang;
pub mod route;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use eta::{ArrivalEntry, Eta};
pub use ids::{Operator, RouteId, StopId, StopKey};
pub use lang::{Lang, LangText, to_proper_case};
pub use route::{HeadwayBand, RouteIndex, RouteInfo, Timetable};
