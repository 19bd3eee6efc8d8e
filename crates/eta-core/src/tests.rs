//! Unit tests for eta-core.

use crate::{Lang, LangText, Operator, RouteId, RouteIndex, RouteInfo, StopKey, to_proper_case};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn info(route: &str, dest_en: &str) -> RouteInfo {
    RouteInfo {
        route:  route.to_owned(),
        orig:   LangText::new("起點", "origin"),
        dest:   LangText::new("終點", dest_en),
        nlb_id: None,
        freq:   None,
        jt:     None,
    }
}

// ── Operator ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod operator {
    use super::*;
    use crate::CoreError;

    #[test]
    fn round_trips_through_str() {
        for co in [
            Operator::Kmb,
            Operator::Ctb,
            Operator::Nlb,
            Operator::Gmb,
            Operator::LightRail,
            Operator::Mtr,
            Operator::Ferry,
        ] {
            assert_eq!(co.as_str().parse::<Operator>().unwrap(), co);
        }
    }

    #[test]
    fn unknown_code_errors() {
        let err = "tram".parse::<Operator>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownOperator(s) if s == "tram"));
    }

    #[test]
    fn stop_key_display_is_co_slash_stop() {
        let key = StopKey::new(Operator::Kmb, "18C1B5A0");
        assert_eq!(key.to_string(), "kmb/18C1B5A0");
    }
}

// ── LangText ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod lang_text {
    use super::*;

    #[test]
    fn picks_requested_language() {
        let t = LangText::new("中環", "Central");
        assert_eq!(t.get(Lang::Zh), "中環");
        assert_eq!(t.get(Lang::En), "Central");
    }

    #[test]
    fn falls_back_when_side_is_empty() {
        let t = LangText::new("中環", "");
        assert_eq!(t.get(Lang::En), "中環");
    }

    #[test]
    fn proper_case_capitalizes_words() {
        assert_eq!(to_proper_case("TSIM SHA TSUI"), "Tsim Sha Tsui");
        assert_eq!(to_proper_case("central (exit A)"), "Central (Exit A)");
    }

    #[test]
    fn proper_case_leaves_chinese_untouched() {
        assert_eq!(to_proper_case("尖沙咀"), "尖沙咀");
    }
}

// ── RouteIndex ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod route_index {
    use super::*;

    #[test]
    fn lookup_hits_and_misses() {
        let idx = RouteIndex::from_iter([
            (RouteId::from("970X+1"), info("970X", "Tsim Sha Tsui")),
            (RouteId::from("2+1"), info("2", "So Uk")),
        ]);
        assert_eq!(idx.len(), 2);
        assert_eq!(idx.get(&RouteId::from("2+1")).unwrap().route, "2");
        assert!(idx.get(&RouteId::from("missing")).is_none());
    }

    #[test]
    fn later_duplicate_wins() {
        let idx = RouteIndex::from_iter([
            (RouteId::from("2+1"), info("2", "So Uk")),
            (RouteId::from("2+1"), info("2", "Grand Waterfront")),
        ]);
        assert_eq!(idx.len(), 1);
        assert_eq!(idx.get(&RouteId::from("2+1")).unwrap().dest.en, "Grand Waterfront");
    }
}
