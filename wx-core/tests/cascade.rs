use wx_core::controller::{MONTH_PLACEHOLDER, STATE_PLACEHOLDER};
use wx_core::models::{Analysis, ChartBundle};
use wx_core::stat_card::AnalysisView;
use wx_core::{Dashboard, DashboardEvent, Request};

fn states(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn bundle(tag: &str) -> ChartBundle {
    ChartBundle {
        temp_chart: format!("{}-temp", tag),
        humidity_chart: format!("{}-humidity", tag),
        wind_chart: format!("{}-wind", tag),
    }
}

/// Dashboard with the given state selected and its months loaded.
fn with_months(state: &str, months: &[&str]) -> (Dashboard, Vec<Request>) {
    let mut dashboard = Dashboard::new();
    dashboard.handle(DashboardEvent::StatesLoaded(states(&[state])));
    dashboard.handle(DashboardEvent::StateSelected(state.to_string()));
    let requests = dashboard.handle(DashboardEvent::MonthsLoaded {
        state: state.to_string(),
        months: states(months),
    });
    (dashboard, requests)
}

#[test]
fn test_state_options_include_placeholder() {
    let mut dashboard = Dashboard::new();
    let requests = dashboard.handle(DashboardEvent::StatesLoaded(states(&[
        "Kerala",
        "Goa",
        "Punjab",
    ])));
    assert!(requests.is_empty());
    assert_eq!(dashboard.state_options.len(), 4);
    assert_eq!(dashboard.state_options[0].label, STATE_PLACEHOLDER);
    assert_eq!(dashboard.state_options[0].value, "");
    assert_eq!(dashboard.state_options[2].value, "Goa");
}

#[test]
fn test_selecting_state_requests_months_and_analysis() {
    let mut dashboard = Dashboard::new();
    let requests = dashboard.handle(DashboardEvent::StateSelected("Kerala".to_string()));
    assert_eq!(
        requests,
        vec![
            Request::Months {
                state: "Kerala".to_string()
            },
            Request::Analysis {
                state: "Kerala".to_string()
            },
        ]
    );
    assert!(dashboard.month_enabled);
}

#[test]
fn test_months_trigger_first_month_charts() {
    let (dashboard, requests) = with_months("Kerala", &["2024-01", "2024-02"]);
    assert_eq!(
        requests,
        vec![Request::Charts {
            state: "Kerala".to_string(),
            month: "2024-01".to_string(),
        }]
    );
    assert_eq!(dashboard.month_options.len(), 2);
    assert_eq!(dashboard.selected_month, "2024-01");
    assert!(dashboard.charts_visible);
    assert!(dashboard.charts.is_blank());
}

#[test]
fn test_charts_loaded_sets_images() {
    let (mut dashboard, _) = with_months("Kerala", &["2024-01"]);
    dashboard.handle(DashboardEvent::ChartsLoaded {
        state: "Kerala".to_string(),
        month: "2024-01".to_string(),
        bundle: bundle("jan"),
    });
    assert_eq!(dashboard.charts.temperature, "data:image/png;base64,jan-temp");
    assert_eq!(dashboard.charts.wind, "data:image/png;base64,jan-wind");
}

#[test]
fn test_month_change_blanks_images_before_reload() {
    let (mut dashboard, _) = with_months("Kerala", &["2024-01", "2024-02"]);
    dashboard.handle(DashboardEvent::ChartsLoaded {
        state: "Kerala".to_string(),
        month: "2024-01".to_string(),
        bundle: bundle("jan"),
    });
    let requests = dashboard.handle(DashboardEvent::MonthSelected("2024-02".to_string()));
    assert_eq!(requests.len(), 1);
    assert!(dashboard.charts.is_blank());
}

#[test]
fn test_record_count_only_analysis() {
    let mut dashboard = Dashboard::new();
    dashboard.handle(DashboardEvent::StateSelected("Goa".to_string()));
    dashboard.handle(DashboardEvent::AnalysisLoaded {
        state: "Goa".to_string(),
        analysis: Analysis {
            record_count: Some(52),
            ..Default::default()
        },
    });
    assert!(dashboard.analysis_visible);
    assert_eq!(dashboard.analysis_heading, "Goa");
    let cards = dashboard.analysis.cards();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].value, "52");
}

#[test]
fn test_analysis_error_shows_message() {
    let mut dashboard = Dashboard::new();
    dashboard.handle(DashboardEvent::StateSelected("Goa".to_string()));
    dashboard.handle(DashboardEvent::AnalysisLoaded {
        state: "Goa".to_string(),
        analysis: Analysis {
            error: Some("no data".to_string()),
            ..Default::default()
        },
    });
    assert!(dashboard.analysis_visible);
    assert_eq!(dashboard.analysis, AnalysisView::Message("no data".to_string()));
    assert!(dashboard.analysis.cards().is_empty());
}

#[test]
fn test_clearing_state_hides_panels() {
    let (mut dashboard, _) = with_months("Kerala", &["2024-01"]);
    dashboard.handle(DashboardEvent::AnalysisLoaded {
        state: "Kerala".to_string(),
        analysis: Analysis::default(),
    });
    assert!(dashboard.analysis_visible);

    let requests = dashboard.handle(DashboardEvent::StateSelected(String::new()));
    assert!(requests.is_empty());
    assert!(!dashboard.month_enabled);
    assert!(!dashboard.analysis_visible);
    assert!(!dashboard.charts_visible);
    assert_eq!(dashboard.month_options.len(), 1);
    assert_eq!(dashboard.month_options[0].label, MONTH_PLACEHOLDER);
}

#[test]
fn test_stale_responses_are_dropped() {
    let mut dashboard = Dashboard::new();
    dashboard.handle(DashboardEvent::StateSelected("Kerala".to_string()));
    dashboard.handle(DashboardEvent::StateSelected("Punjab".to_string()));

    let requests = dashboard.handle(DashboardEvent::MonthsLoaded {
        state: "Kerala".to_string(),
        months: states(&["2024-01"]),
    });
    assert!(requests.is_empty());
    assert_ne!(dashboard.selected_month, "2024-01");

    dashboard.handle(DashboardEvent::AnalysisLoaded {
        state: "Kerala".to_string(),
        analysis: Analysis {
            record_count: Some(10),
            ..Default::default()
        },
    });
    assert!(!dashboard.analysis_visible);
}

#[test]
fn test_stale_charts_for_previous_month_dropped() {
    let (mut dashboard, _) = with_months("Kerala", &["2024-01", "2024-02"]);
    dashboard.handle(DashboardEvent::MonthSelected("2024-02".to_string()));
    dashboard.handle(DashboardEvent::ChartsLoaded {
        state: "Kerala".to_string(),
        month: "2024-01".to_string(),
        bundle: bundle("jan"),
    });
    assert!(dashboard.charts.is_blank());
}

#[test]
fn test_analysis_after_clearing_state_keeps_panel_hidden() {
    let mut dashboard = Dashboard::new();
    dashboard.handle(DashboardEvent::StateSelected("Goa".to_string()));
    dashboard.handle(DashboardEvent::StateSelected(String::new()));

    let requests = dashboard.handle(DashboardEvent::AnalysisLoaded {
        state: "Goa".to_string(),
        analysis: Analysis {
            record_count: Some(52),
            ..Default::default()
        },
    });
    assert!(requests.is_empty());
    assert!(!dashboard.analysis_visible);
    assert!(dashboard.analysis_heading.is_empty());
    assert!(dashboard.analysis.cards().is_empty());
}
