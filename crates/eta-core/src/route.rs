//! Route metadata: per-route display info and the read-only route index.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::{LangText, RouteId};

// ── Timetable ─────────────────────────────────────────────────────────────────

/// One scheduled-frequency band: between `start` and `end` (HHMM strings from
/// the feed) a vehicle departs every `headway_secs`.  `end` and
/// `headway_secs` are absent for single fixed departures.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct HeadwayBand {
    pub start:        String,
    pub end:          Option<String>,
    pub headway_secs: Option<u32>,
}

/// Scheduled frequency table for one route, grouped by service-day pattern
/// (e.g. `"31"` = Mon–Fri, `"287"` = Sat/Sun/holiday in the upstream feed).
///
/// Kept in feed order; this core only flattens it for display.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Timetable {
    pub bands: Vec<(String, Vec<HeadwayBand>)>,
}

impl Timetable {
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

// ── RouteInfo ─────────────────────────────────────────────────────────────────

/// Display metadata for one route, as supplied by the routing-table feed.
///
/// Read-only from this core's point of view: the index is built once at load
/// and only consulted for presentation.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct RouteInfo {
    /// Public route number, e.g. `"970X"`.
    pub route: String,

    /// Origin terminus label.
    pub orig: LangText,

    /// Destination terminus label.
    pub dest: LangText,

    /// New Lantao Bus internal route ID.  Presence marks routes whose
    /// headsign convention is "to DEST from ORIG" rather than just "to DEST".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nlb_id: Option<String>,

    /// Scheduled frequency table.  `None` means the route publishes no
    /// timetable and the timetable affordance is not shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freq: Option<Timetable>,

    /// End-to-end journey time in minutes, when the feed provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jt: Option<u16>,
}

// ── RouteIndex ────────────────────────────────────────────────────────────────

/// Read-only lookup from [`RouteId`] to [`RouteInfo`].
///
/// Built once from the routing-table feed at session start; this core never
/// mutates it.  Lookups of unknown routes return `None` — bookmarks can
/// outlive a route that was dropped from the feed.
#[derive(Clone, Debug, Default)]
pub struct RouteIndex {
    routes: FxHashMap<RouteId, RouteInfo>,
}

/// Build the index from `(id, info)` pairs.  Later duplicates win, which
/// matches the upstream feed's own overwrite semantics.
impl FromIterator<(RouteId, RouteInfo)> for RouteIndex {
    fn from_iter<I: IntoIterator<Item = (RouteId, RouteInfo)>>(iter: I) -> Self {
        Self { routes: iter.into_iter().collect() }
    }
}

impl RouteIndex {
    #[inline]
    pub fn get(&self, id: &RouteId) -> Option<&RouteInfo> {
        self.routes.get(id)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
