//! Arrival-time records produced by the external ETA source.

use serde::{Deserialize, Serialize};

use crate::{LangText, Operator, RouteId};

/// One arrival-time estimate for a vehicle at a stop.
///
/// Produced fresh on every fetch and never persisted; staleness policy is
/// owned by the ETA source, not by anything in this workspace.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Eta {
    /// Estimated arrival time, RFC 3339 as delivered by the feed.
    pub time: String,

    /// Feed remark, e.g. "Scheduled Bus" — often empty.
    #[serde(default)]
    pub remark: LangText,

    /// Operator whose feed produced this estimate.
    pub co: Operator,
}

/// All pending arrivals for one route at the fetched stop(s), in feed order
/// (soonest first).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ArrivalEntry {
    pub route: RouteId,
    pub etas:  Vec<Eta>,
}
