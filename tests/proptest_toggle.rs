//! Property-based tests for the dashboard controller.
//!
//! Replays arbitrary event sequences and checks that toggles behave as
//! independent involutions and that tab selection never leaks into
//! connection state.

use family_office::{DashboardApp, DashboardTab, EventResult, ServiceId, TabContent, UiEvent};
use proptest::prelude::*;

fn service() -> impl Strategy<Value = ServiceId> {
    prop::sample::select(ServiceId::ALL.to_vec())
}

fn tab() -> impl Strategy<Value = DashboardTab> {
    prop::sample::select(DashboardTab::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn connection_is_parity_of_toggles(toggles in prop::collection::vec(service(), 0..64)) {
        let mut app = DashboardApp::default();
        for s in &toggles {
            app.toggle_connection(*s);
        }
        for s in ServiceId::ALL {
            let count = toggles.iter().filter(|t| **t == s).count();
            prop_assert_eq!(app.connections().is_connected(s), count % 2 == 1);
        }
    }

    #[test]
    fn tab_selection_never_touches_connections(
        toggles in prop::collection::vec(service(), 0..16),
        tabs in prop::collection::vec(tab(), 1..16),
    ) {
        let mut app = DashboardApp::default();
        for s in toggles {
            app.toggle_connection(s);
        }
        let connections = *app.connections();
        for t in &tabs {
            app.select_tab(*t);
        }
        prop_assert_eq!(*app.connections(), connections);
        prop_assert_eq!(app.active_tab(), *tabs.last().expect("non-empty"));
    }

    #[test]
    fn unknown_ids_are_ignored(id in "[a-z]{1,12}") {
        prop_assume!(id.parse::<ServiceId>().is_err());
        let mut app = DashboardApp::default();
        let before = *app.state();
        prop_assert_eq!(app.dispatch(UiEvent::ToggleConnection(id)), EventResult::Ignored);
        prop_assert_eq!(*app.state(), before);
    }

    #[test]
    fn view_always_has_one_matching_region(
        toggles in prop::collection::vec(service(), 0..8),
        t in tab(),
    ) {
        let mut app = DashboardApp::default();
        for s in toggles {
            app.toggle_connection(s);
        }
        app.select_tab(t);
        let view = app.render();
        prop_assert_eq!(view.content.tab(), t);
        prop_assert_eq!(view.integrations.len(), 4);
        let is_portfolio = matches!(view.content, TabContent::Portfolio(_));
        prop_assert_eq!(is_portfolio, t == DashboardTab::Portfolio);
    }
}
