//! Flattened timetable render model behind the "timetable" affordance.

use eta_core::RouteInfo;

/// One displayed frequency row.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TimetableRow {
    /// Service-day pattern code from the feed (e.g. weekdays vs. holidays).
    pub service_day:  String,
    pub start:        String,
    pub end:          Option<String>,
    pub headway_secs: Option<u32>,
}

/// Content of the timetable drawer.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TimetableRender {
    pub rows: Vec<TimetableRow>,

    /// End-to-end journey time in minutes, when the feed provides one.
    pub journey_time_mins: Option<u16>,
}

/// Flatten `info`'s frequency table for display.
///
/// Returns `None` when the route publishes no timetable — the affordance is
/// simply not shown for such routes.
pub fn timetable_rows(info: &RouteInfo) -> Option<TimetableRender> {
    let freq = info.freq.as_ref()?;

    let rows = freq
        .bands
        .iter()
        .flat_map(|(service_day, bands)| {
            bands.iter().map(move |band| TimetableRow {
                service_day:  service_day.clone(),
                start:        band.start.clone(),
                end:          band.end.clone(),
                headway_secs: band.headway_secs,
            })
        })
        .collect();

    Some(TimetableRender { rows, journey_time_mins: info.jt })
}
