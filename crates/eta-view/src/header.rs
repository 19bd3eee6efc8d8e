//! Route header render model: route number plus terminus labels.

use eta_core::{CoreError, CoreResult, Lang, RouteId, RouteIndex, to_proper_case};

/// Header content for one route's ETA page.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RouteHeader {
    /// Public route number, e.g. `"970X"`.
    pub route_no: String,

    /// Proper-cased destination terminus ("to …").
    pub destination: String,

    /// Proper-cased origin terminus ("from …").  Present only for routes
    /// carrying an NLB route ID, whose headsign convention names both ends.
    pub origin: Option<String>,
}

/// Build the header for `id` in `lang`.
///
/// # Errors
///
/// Returns [`CoreError::RouteNotFound`] when the route is absent from the
/// index (a bookmark can outlive its route).
pub fn route_header(index: &RouteIndex, id: &RouteId, lang: Lang) -> CoreResult<RouteHeader> {
    let info = index
        .get(id)
        .ok_or_else(|| CoreError::RouteNotFound(id.clone()))?;

    let origin = info
        .nlb_id
        .as_ref()
        .map(|_| to_proper_case(info.orig.get(lang)));

    Ok(RouteHeader {
        route_no:    info.route.clone(),
        destination: to_proper_case(info.dest.get(lang)),
        origin,
    })
}
