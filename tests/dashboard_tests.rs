//! Integration tests for family-office
//!
//! These tests drive the controller through its public API and check the
//! composed view against the dashboard's observable contract.

use family_office::{
    DashboardApp, DashboardState, DashboardTab, Dataset, EventResult, NOMINAL_PORTFOLIO_TOTAL,
    ServiceId, TabContent, UiEvent, compose,
    model::PortfolioEntry,
    tui::view::IntegrationCard,
};

fn card(cards: &[IntegrationCard], service: ServiceId) -> &IntegrationCard {
    cards
        .iter()
        .find(|c| c.service == service)
        .expect("every service has a card")
}

// ============================================================================
// Initial State
// ============================================================================

mod initial_state_tests {
    use super::*;

    #[test]
    fn test_fresh_dashboard() {
        let app = DashboardApp::default();
        let view = app.render();

        assert_eq!(view.active_tab(), DashboardTab::Dashboard);
        assert_eq!(view.integrations.len(), 4);
        for service in ServiceId::ALL {
            let c = card(&view.integrations, service);
            assert!(!c.connected);
            assert_eq!(c.status_label, "Not Connected");
            assert_eq!(c.button_label, "Connect");
        }

        let TabContent::Dashboard(metrics) = &view.content else {
            panic!("expected dashboard content, got {:?}", view.content.tab());
        };
        assert_eq!(metrics.len(), 3);
        assert_eq!(metrics[0].value, "$6.0M");
    }

    #[test]
    fn test_header_always_present() {
        for tab in DashboardTab::ALL {
            let state = DashboardState {
                active_tab: tab,
                ..DashboardState::default()
            };
            let view = compose(&state, &Dataset::builtin());
            assert_eq!(view.header.title, "Family Office Management Platform");
            assert_eq!(view.integrations.len(), 4);
            assert_eq!(view.tabs.len(), 5);
        }
    }
}

// ============================================================================
// Connection Toggles
// ============================================================================

mod toggle_tests {
    use super::*;

    #[test]
    fn test_toggle_affects_only_its_service() {
        let mut app = DashboardApp::default();
        app.toggle_connection(ServiceId::BlackboxAi);

        let view = app.render();
        assert!(card(&view.integrations, ServiceId::BlackboxAi).connected);
        assert_eq!(
            card(&view.integrations, ServiceId::BlackboxAi).button_label,
            "Disconnect"
        );
        for service in [ServiceId::GoogleDrive, ServiceId::Plaid, ServiceId::Docusign] {
            assert!(!card(&view.integrations, service).connected);
        }
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut app = DashboardApp::default();
        let before = *app.state();
        app.toggle_connection(ServiceId::Docusign);
        app.toggle_connection(ServiceId::Docusign);
        assert_eq!(*app.state(), before);
    }

    #[test]
    fn test_toggle_keeps_active_tab() {
        let mut app = DashboardApp::default();
        app.select_tab(DashboardTab::Documents);
        app.toggle_connection(ServiceId::GoogleDrive);
        assert_eq!(app.active_tab(), DashboardTab::Documents);
    }
}

// ============================================================================
// Tab Selection
// ============================================================================

mod tab_tests {
    use super::*;

    #[test]
    fn test_exactly_one_region_per_tab() {
        let mut app = DashboardApp::default();
        for tab in DashboardTab::ALL {
            app.select_tab(tab);
            let view = app.render();
            assert_eq!(view.content.tab(), tab);
            assert_eq!(view.tabs.iter().filter(|t| t.active).count(), 1);
            assert!(view.tabs.iter().any(|t| t.active && t.tab == tab));
        }
    }

    #[test]
    fn test_select_tab_keeps_connections() {
        let mut app = DashboardApp::default();
        app.toggle_connection(ServiceId::Plaid);
        let connections = *app.connections();
        for tab in DashboardTab::ALL {
            app.select_tab(tab);
            assert_eq!(*app.connections(), connections);
        }
    }

    #[test]
    fn test_select_same_tab_is_noop() {
        let mut app = DashboardApp::default();
        app.select_tab(DashboardTab::AiInsights);
        let before = *app.state();
        app.select_tab(DashboardTab::AiInsights);
        assert_eq!(*app.state(), before);
    }
}

// ============================================================================
// Raw Identifier Events
// ============================================================================

mod dispatch_tests {
    use super::*;

    #[test]
    fn test_plaid_then_automation() {
        let mut app = DashboardApp::default();
        assert_eq!(
            app.dispatch(UiEvent::ToggleConnection("plaid".into())),
            EventResult::Rerender
        );
        assert_eq!(
            app.dispatch(UiEvent::SelectTab("automation".into())),
            EventResult::Rerender
        );

        let view = app.render();
        assert!(card(&view.integrations, ServiceId::Plaid).connected);
        assert_eq!(view.integrations.iter().filter(|c| c.connected).count(), 1);

        let TabContent::Automation(workflows) = &view.content else {
            panic!("expected automation content");
        };
        assert_eq!(workflows.len(), 3);
        assert_eq!(workflows[2].status_label, "Pending Setup");
        assert_eq!(workflows[2].action_label, "Setup");
        assert_eq!(workflows[0].action_label, "Configure");
    }

    #[test]
    fn test_unknown_ids_leave_state_unchanged() {
        let mut app = DashboardApp::default();
        app.toggle_connection(ServiceId::GoogleDrive);
        let before = *app.state();

        assert_eq!(
            app.dispatch(UiEvent::ToggleConnection("dropbox".into())),
            EventResult::Ignored
        );
        assert_eq!(
            app.dispatch(UiEvent::SelectTab("settings".into())),
            EventResult::Ignored
        );
        assert_eq!(*app.state(), before);
    }

    #[test]
    fn test_wire_ids_accepted() {
        let mut app = DashboardApp::default();
        for id in ["googleDrive", "blackboxAI", "plaid", "docusign"] {
            assert_eq!(
                app.dispatch(UiEvent::ToggleConnection(id.into())),
                EventResult::Rerender
            );
        }
        assert_eq!(app.connections().connected_count(), 4);
        assert_eq!(
            app.dispatch(UiEvent::SelectTab("ai-insights".into())),
            EventResult::Rerender
        );
        assert_eq!(app.active_tab(), DashboardTab::AiInsights);
    }
}

// ============================================================================
// Composition
// ============================================================================

mod compose_tests {
    use super::*;

    #[test]
    fn test_compose_is_pure() {
        let mut state = DashboardState {
            active_tab: DashboardTab::Portfolio,
            ..DashboardState::default()
        };
        state.connections.toggle(ServiceId::Docusign);
        let dataset = Dataset::builtin();

        let first = compose(&state, &dataset);
        let second = compose(&state, &dataset);
        assert_eq!(first, second);
    }

    #[test]
    fn test_portfolio_ratios_use_nominal_total() {
        let mut app = DashboardApp::default();
        app.select_tab(DashboardTab::Portfolio);
        let view = app.render();

        let TabContent::Portfolio(rows) = &view.content else {
            panic!("expected portfolio content");
        };
        let labels: Vec<&str> = rows.iter().map(|r| r.ratio_label.as_str()).collect();
        assert_eq!(labels, ["41.67%", "30.00%", "15.83%", "12.50%"]);
        assert_eq!(rows[0].value_label, "$2,500,000");
        assert_eq!(rows[0].change_label, "+5.2%");
        assert!(rows.iter().all(|r| r.gain));
    }

    #[test]
    fn test_added_holding_keeps_nominal_divisor() {
        let mut dataset = Dataset::builtin();
        dataset
            .portfolio
            .push(PortfolioEntry::new("Private Credit", 600_000, -0.4));
        assert_eq!(dataset.displayed_total(), 6_600_000);

        let state = DashboardState {
            active_tab: DashboardTab::Portfolio,
            ..DashboardState::default()
        };
        let view = compose(&state, &dataset);
        let TabContent::Portfolio(rows) = &view.content else {
            panic!("expected portfolio content");
        };
        assert_eq!(rows.len(), 5);
        assert!((rows[4].ratio - 600_000.0 / NOMINAL_PORTFOLIO_TOTAL as f64).abs() < f64::EPSILON);
        assert_eq!(rows[4].ratio_label, "10.00%");
        assert!(!rows[4].gain);
        assert_eq!(rows[4].change_label, "-0.4%");
    }

    #[test]
    fn test_documents_and_insights() {
        let mut app = DashboardApp::default();
        app.select_tab(DashboardTab::Documents);
        let TabContent::Documents(docs) = app.render().content else {
            panic!("expected documents content");
        };
        assert_eq!(docs.len(), 4);
        assert_eq!(docs[0].subtitle, "PDF • 2024-01-15");

        app.select_tab(DashboardTab::AiInsights);
        let TabContent::AiInsights(insights) = app.render().content else {
            panic!("expected insights content");
        };
        assert_eq!(insights.len(), 4);
    }
}
