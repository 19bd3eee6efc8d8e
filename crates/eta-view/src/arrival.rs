//! The arrival display: live ETAs for a set of bookmarked stops.

use eta_core::{ArrivalEntry, CoreResult, StopKey};

/// The external ETA data source.
///
/// Implementations own all fetch mechanics — transport, caching, refresh
/// cadence, stale-response discard.  The view only asks for the current
/// answer for a key set; it is re-invoked whenever the keys change or the
/// shell schedules a refresh.
pub trait EtaSource {
    /// Grouped pending arrivals for `keys`: one entry per distinct route,
    /// ETAs ordered soonest-first.
    fn stop_etas(&mut self, keys: &[StopKey]) -> CoreResult<Vec<ArrivalEntry>>;
}

/// What the UI shell should draw for the arrival panel.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ArrivalRender<'a> {
    /// The panel is inactive (e.g. its tab is out of focus): nothing is
    /// fetched and nothing is shown.
    Disabled,
    /// Enabled but no data yet — also covers fetch failures and routes with
    /// no pending arrivals, which are indistinguishable here.
    Loading,
    /// One row per distinct route with its ordered arrival times.
    Arrivals(&'a [ArrivalEntry]),
}

/// Read-only consumer of an [`EtaSource`] for a fixed set of stop keys.
///
/// Toggling `disabled` on drops any previously fetched data immediately;
/// re-enabling starts from the loading state until the next refresh.
pub struct ArrivalDisplayView {
    keys:     Vec<StopKey>,
    disabled: bool,
    entries:  Option<Vec<ArrivalEntry>>,
}

impl ArrivalDisplayView {
    pub fn new(keys: Vec<StopKey>, disabled: bool) -> Self {
        Self { keys, disabled, entries: None }
    }

    #[inline]
    pub fn keys(&self) -> &[StopKey] {
        &self.keys
    }

    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Enable or disable the panel.  Disabling discards fetched entries so
    /// nothing stale is ever rendered after the panel loses focus.
    pub fn set_disabled(&mut self, disabled: bool) {
        if disabled {
            self.entries = None;
        }
        self.disabled = disabled;
    }

    /// Replace the stop-key set.  A changed set discards fetched entries;
    /// the next [`refresh`][Self::refresh] re-fetches for the new keys.
    pub fn set_keys(&mut self, keys: Vec<StopKey>) {
        if keys != self.keys {
            self.entries = None;
            self.keys = keys;
        }
    }

    /// Ask the source for fresh data.  No-op while disabled.
    ///
    /// A fetch failure leaves the current entries in place — the panel
    /// degrades to whatever it last showed (or the loading state), never to
    /// an error screen.  Returns `true` when new data was applied.
    pub fn refresh<S: EtaSource>(&mut self, source: &mut S) -> bool {
        if self.disabled {
            return false;
        }
        match source.stop_etas(&self.keys) {
            Ok(entries) => {
                self.entries = Some(entries);
                true
            }
            Err(_) => false,
        }
    }

    /// Current render model.
    pub fn render(&self) -> ArrivalRender<'_> {
        if self.disabled {
            return ArrivalRender::Disabled;
        }
        match self.entries.as_deref() {
            // An empty fetch result looks like loading, matching the
            // "no data yet" presentation.
            None | Some([]) => ArrivalRender::Loading,
            Some(entries) => ArrivalRender::Arrivals(entries),
        }
    }
}
