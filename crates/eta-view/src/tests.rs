//! Unit tests for eta-view.

use eta_collection::{CollectionStore, DropEvent, RouteCollection};
use eta_core::{
    ArrivalEntry, CoreError, CoreResult, Eta, HeadwayBand, Lang, LangText, Operator, RouteId,
    RouteIndex, RouteInfo, StopKey, Timetable,
};

use crate::arrival::{ArrivalDisplayView, ArrivalRender, EtaSource};
use crate::header::route_header;
use crate::list::{CollectionListView, ListRender, ManageMode, empty_list_message};
use crate::timetable::timetable_rows;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn store_with(names: &[&str]) -> CollectionStore {
    CollectionStore::new(
        names
            .iter()
            .map(|n| RouteCollection::new(*n, vec![format!("{n}-1"), format!("{n}-2")]))
            .collect(),
    )
}

fn rendered_names(render: &ListRender) -> Vec<String> {
    match render {
        ListRender::Items(items) => items.iter().map(|i| i.name.clone()).collect(),
        ListRender::Empty { .. } => panic!("expected items, got empty state"),
    }
}

fn route_info(nlb_id: Option<&str>, freq: Option<Timetable>) -> RouteInfo {
    RouteInfo {
        route:  "970X".to_owned(),
        orig:   LangText::new("香港仔", "ABERDEEN"),
        dest:   LangText::new("尖沙咀", "TSIM SHA TSUI"),
        nlb_id: nlb_id.map(str::to_owned),
        freq,
        jt:     Some(62),
    }
}

fn eta(time: &str) -> Eta {
    Eta {
        time:   time.to_owned(),
        remark: LangText::default(),
        co:     Operator::Kmb,
    }
}

// ── CollectionListView ────────────────────────────────────────────────────────

#[cfg(test)]
mod list_view {
    use super::*;

    #[test]
    fn empty_sequence_renders_empty_state_marker() {
        let store = store_with(&[]);
        let view = CollectionListView::new(&store);
        let render = view.render(ManageMode::Order, Lang::En);
        assert_eq!(
            render,
            ListRender::Empty { message: empty_list_message(Lang::En) }
        );
        // Both languages have a designated message.
        assert_eq!(empty_list_message(Lang::Zh), "未有收藏。");
    }

    #[test]
    fn order_mode_rows_are_draggable_not_deletable() {
        let store = store_with(&["commute", "weekend"]);
        let view = CollectionListView::new(&store);
        let ListRender::Items(items) = view.render(ManageMode::Order, Lang::En) else {
            panic!("expected items");
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "commute");
        assert_eq!(items[0].entry_count, 2);
        assert!(items.iter().all(|i| i.drag_enabled && !i.deletable));
    }

    #[test]
    fn delete_mode_rows_are_deletable_not_draggable() {
        let store = store_with(&["commute"]);
        let view = CollectionListView::new(&store);
        let ListRender::Items(items) = view.render(ManageMode::Delete, Lang::En) else {
            panic!("expected items");
        };
        assert!(items.iter().all(|i| i.deletable && !i.drag_enabled));
    }

    #[test]
    fn drop_reorders_and_refreshes_snapshot() {
        let mut store = store_with(&["A", "B", "C"]);
        let mut view = CollectionListView::new(&store);
        let changed =
            view.handle_drop(&mut store, ManageMode::Order, DropEvent::new(0, Some(2)));
        assert!(changed);
        assert_eq!(
            rendered_names(&view.render(ManageMode::Order, Lang::En)),
            ["B", "C", "A"]
        );
    }

    #[test]
    fn drop_outside_target_changes_nothing() {
        let mut store = store_with(&["A", "B", "C"]);
        let mut view = CollectionListView::new(&store);
        let changed = view.handle_drop(&mut store, ManageMode::Order, DropEvent::new(1, None));
        assert!(!changed);
        assert_eq!(store.version(), 0);
        assert_eq!(
            rendered_names(&view.render(ManageMode::Order, Lang::En)),
            ["A", "B", "C"]
        );
    }

    #[test]
    fn drop_is_ignored_in_delete_mode() {
        let mut store = store_with(&["A", "B"]);
        let mut view = CollectionListView::new(&store);
        let changed =
            view.handle_drop(&mut store, ManageMode::Delete, DropEvent::new(0, Some(1)));
        assert!(!changed);
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn delete_click_is_ignored_in_order_mode() {
        let mut store = store_with(&["A", "B"]);
        let view = CollectionListView::new(&store);
        assert!(!view.delete_clicked(&mut store, ManageMode::Order, 0));
        assert_eq!(store.pending_delete(), None);
    }

    #[test]
    fn delete_click_requests_without_mutating() {
        let mut store = store_with(&["A", "B"]);
        let view = CollectionListView::new(&store);
        assert!(view.delete_clicked(&mut store, ManageMode::Delete, 1));
        assert_eq!(store.pending_delete(), Some(1));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn sync_picks_up_external_deletion() {
        let mut store = store_with(&["A", "B"]);
        let mut view = CollectionListView::new(&store);

        // Deletion confirmed elsewhere (dialog collaborator).
        store.request_delete(0);
        store.confirm_delete().unwrap();

        assert!(view.sync(&store));
        assert_eq!(
            rendered_names(&view.render(ManageMode::Order, Lang::En)),
            ["B"]
        );
        // A second sync with no store change is a no-op.
        assert!(!view.sync(&store));
    }

    #[test]
    fn sync_to_empty_renders_empty_state() {
        let mut store = store_with(&["A"]);
        let mut view = CollectionListView::new(&store);
        store.request_delete(0);
        store.confirm_delete().unwrap();
        view.sync(&store);
        assert!(matches!(
            view.render(ManageMode::Delete, Lang::En),
            ListRender::Empty { .. }
        ));
    }
}

// ── ArrivalDisplayView ────────────────────────────────────────────────────────

#[cfg(test)]
mod arrival_view {
    use super::*;

    /// Scripted source: pops the front response per call and counts fetches.
    struct ScriptedSource {
        responses: Vec<CoreResult<Vec<ArrivalEntry>>>,
        fetches:   usize,
    }

    impl ScriptedSource {
        fn new(responses: Vec<CoreResult<Vec<ArrivalEntry>>>) -> Self {
            Self { responses, fetches: 0 }
        }
    }

    impl EtaSource for ScriptedSource {
        fn stop_etas(&mut self, _keys: &[StopKey]) -> CoreResult<Vec<ArrivalEntry>> {
            self.fetches += 1;
            self.responses.remove(0)
        }
    }

    fn keys() -> Vec<StopKey> {
        vec![StopKey::new(Operator::Kmb, "18C1B5A0")]
    }

    fn arrivals() -> Vec<ArrivalEntry> {
        vec![ArrivalEntry {
            route: RouteId::from("970X+1"),
            etas:  vec![eta("2024-05-01T10:00:00+08:00"), eta("2024-05-01T10:12:00+08:00")],
        }]
    }

    #[test]
    fn disabled_view_never_fetches() {
        let mut view = ArrivalDisplayView::new(keys(), true);
        let mut source = ScriptedSource::new(vec![Ok(arrivals())]);
        assert!(!view.refresh(&mut source));
        assert_eq!(source.fetches, 0);
        assert_eq!(view.render(), ArrivalRender::Disabled);
    }

    #[test]
    fn enabled_without_data_is_loading() {
        let view = ArrivalDisplayView::new(keys(), false);
        assert_eq!(view.render(), ArrivalRender::Loading);
    }

    #[test]
    fn fetched_data_renders_one_entry_per_route() {
        let mut view = ArrivalDisplayView::new(keys(), false);
        let mut source = ScriptedSource::new(vec![Ok(arrivals())]);
        assert!(view.refresh(&mut source));

        let ArrivalRender::Arrivals(entries) = view.render() else {
            panic!("expected arrivals");
        };
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].route, RouteId::from("970X+1"));
        assert_eq!(entries[0].etas.len(), 2);
    }

    #[test]
    fn empty_fetch_result_still_looks_like_loading() {
        let mut view = ArrivalDisplayView::new(keys(), false);
        let mut source = ScriptedSource::new(vec![Ok(Vec::new())]);
        view.refresh(&mut source);
        assert_eq!(view.render(), ArrivalRender::Loading);
    }

    #[test]
    fn disabling_drops_previously_fetched_data() {
        let mut view = ArrivalDisplayView::new(keys(), false);
        let mut source = ScriptedSource::new(vec![Ok(arrivals())]);
        view.refresh(&mut source);
        assert!(matches!(view.render(), ArrivalRender::Arrivals(_)));

        view.set_disabled(true);
        assert_eq!(view.render(), ArrivalRender::Disabled);

        // Re-enabling starts over from loading, not from stale data.
        view.set_disabled(false);
        assert_eq!(view.render(), ArrivalRender::Loading);
    }

    #[test]
    fn fetch_failure_keeps_last_good_data() {
        let mut view = ArrivalDisplayView::new(keys(), false);
        let mut source = ScriptedSource::new(vec![
            Ok(arrivals()),
            Err(CoreError::Source("upstream 502".to_owned())),
        ]);
        view.refresh(&mut source);
        assert!(!view.refresh(&mut source));
        assert!(matches!(view.render(), ArrivalRender::Arrivals(_)));
    }

    #[test]
    fn key_change_clears_entries_for_refetch() {
        let mut view = ArrivalDisplayView::new(keys(), false);
        let mut source = ScriptedSource::new(vec![Ok(arrivals())]);
        view.refresh(&mut source);

        view.set_keys(vec![StopKey::new(Operator::Ctb, "001234")]);
        assert_eq!(view.render(), ArrivalRender::Loading);

        // Same keys again: nothing is discarded.
        let mut view2 = ArrivalDisplayView::new(keys(), false);
        let mut source2 = ScriptedSource::new(vec![Ok(arrivals())]);
        view2.refresh(&mut source2);
        view2.set_keys(keys());
        assert!(matches!(view2.render(), ArrivalRender::Arrivals(_)));
    }
}

// ── Route header ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod header_view {
    use super::*;

    fn index(info: RouteInfo) -> RouteIndex {
        RouteIndex::from_iter([(RouteId::from("970X+1"), info)])
    }

    #[test]
    fn header_proper_cases_destination() {
        let idx = index(route_info(None, None));
        let h = route_header(&idx, &RouteId::from("970X+1"), Lang::En).unwrap();
        assert_eq!(h.route_no, "970X");
        assert_eq!(h.destination, "Tsim Sha Tsui");
        assert_eq!(h.origin, None);
    }

    #[test]
    fn nlb_routes_also_name_the_origin() {
        let idx = index(route_info(Some("12"), None));
        let h = route_header(&idx, &RouteId::from("970X+1"), Lang::En).unwrap();
        assert_eq!(h.origin.as_deref(), Some("Aberdeen"));
    }

    #[test]
    fn chinese_labels_pass_through_unchanged() {
        let idx = index(route_info(None, None));
        let h = route_header(&idx, &RouteId::from("970X+1"), Lang::Zh).unwrap();
        assert_eq!(h.destination, "尖沙咀");
    }

    #[test]
    fn unknown_route_errors() {
        let idx = index(route_info(None, None));
        let err = route_header(&idx, &RouteId::from("gone"), Lang::En).unwrap_err();
        assert!(matches!(err, CoreError::RouteNotFound(id) if id == RouteId::from("gone")));
    }
}

// ── Timetable ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod timetable_view {
    use super::*;

    fn freq() -> Timetable {
        Timetable {
            bands: vec![
                (
                    "31".to_owned(), // Mon–Fri
                    vec![
                        HeadwayBand {
                            start:        "0600".to_owned(),
                            end:          Some("0900".to_owned()),
                            headway_secs: Some(900),
                        },
                        HeadwayBand {
                            start:        "2300".to_owned(),
                            end:          None,
                            headway_secs: None,
                        },
                    ],
                ),
                (
                    "287".to_owned(), // Sat/Sun/holiday
                    vec![HeadwayBand {
                        start:        "0700".to_owned(),
                        end:          Some("2200".to_owned()),
                        headway_secs: Some(1200),
                    }],
                ),
            ],
        }
    }

    #[test]
    fn no_freq_means_no_timetable_affordance() {
        assert!(timetable_rows(&route_info(None, None)).is_none());
    }

    #[test]
    fn flattens_bands_in_feed_order() {
        let render = timetable_rows(&route_info(None, Some(freq()))).unwrap();
        assert_eq!(render.journey_time_mins, Some(62));
        assert_eq!(render.rows.len(), 3);
        assert_eq!(render.rows[0].service_day, "31");
        assert_eq!(render.rows[0].headway_secs, Some(900));
        // Single fixed departure keeps its open end.
        assert_eq!(render.rows[1].start, "2300");
        assert_eq!(render.rows[1].end, None);
        assert_eq!(render.rows[2].service_day, "287");
    }
}
