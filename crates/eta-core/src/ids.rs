//! Strongly typed route/stop identifiers and the transit operator code.
//!
//! Route and stop IDs are opaque strings handed to us by the upstream data
//! feeds; wrapping them keeps the two from being swapped at call sites and
//! lets them serve as map keys without ceremony.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Generate a typed ID wrapper around an owned string.
macro_rules! string_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
        #[serde(transparent)]
        $vis struct $name(pub String);

        impl $name {
            /// Borrow the raw identifier.
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id! {
    /// Identifier of one route + direction + service type in the route
    /// metadata feed, e.g. `"970X+1+Aberdeen+Tsim Sha Tsui"`.
    pub struct RouteId;
}

string_id! {
    /// Identifier of a physical stop within one operator's network.
    pub struct StopId;
}

// ── Operator ──────────────────────────────────────────────────────────────────

/// Transit company code — identifies which upstream feed a stop or route
/// belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub enum Operator {
    /// Kowloon Motor Bus.
    Kmb,
    /// Citybus.
    Ctb,
    /// New Lantao Bus.
    Nlb,
    /// Green minibus.
    Gmb,
    /// Light Rail.
    LightRail,
    /// Mass Transit Railway.
    Mtr,
    /// Ferry services.
    Ferry,
}

impl Operator {
    /// Feed code as it appears in stop keys and saved bookmarks.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Kmb       => "kmb",
            Operator::Ctb       => "ctb",
            Operator::Nlb       => "nlb",
            Operator::Gmb       => "gmb",
            Operator::LightRail => "lightRail",
            Operator::Mtr       => "mtr",
            Operator::Ferry     => "ferry",
        }
    }
}

impl FromStr for Operator {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kmb"       => Ok(Operator::Kmb),
            "ctb"       => Ok(Operator::Ctb),
            "nlb"       => Ok(Operator::Nlb),
            "gmb"       => Ok(Operator::Gmb),
            "lightRail" => Ok(Operator::LightRail),
            "mtr"       => Ok(Operator::Mtr),
            "ferry"     => Ok(Operator::Ferry),
            other       => Err(CoreError::UnknownOperator(other.to_owned())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── StopKey ───────────────────────────────────────────────────────────────────

/// The `(operator, stop)` pair the arrival view fetches ETAs for.
///
/// A bookmarked stop is always qualified by its operator because stop IDs are
/// only unique within one operator's feed.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct StopKey {
    pub co:   Operator,
    pub stop: StopId,
}

impl StopKey {
    pub fn new(co: Operator, stop: impl Into<StopId>) -> Self {
        Self { co, stop: stop.into() }
    }
}

impl fmt::Display for StopKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.co, self.stop)
    }
}
