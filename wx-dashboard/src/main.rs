//! Weather Dashboard
//!
//! Lets the user pick a state and a month and shows what the weather
//! analysis backend reports for them: summary statistics as stat cards and
//! three server-rendered charts (temperature, humidity, wind).
//!
//! Data flow:
//! 1. On mount, the state list is fetched from `/states`.
//! 2. Choosing a state fetches `/months/{state}` and `/analysis/{state}`.
//! 3. Once the months arrive, the first one is selected automatically,
//!    which fetches `/charts/{state}/{month}`.
//! 4. Choosing another month fetches that month's charts.

use dioxus::prelude::*;
use wx_core::Endpoints;
use wx_ui::components::{AnalysisPanel, ChartPanel, MonthSelector, StateSelector};
use wx_ui::dispatch;
use wx_ui::state::AppState;

/// Backend base URL. Empty means the dashboard is served by the backend itself.
const API_BASE: &str = "";

/// DOM element the app mounts into.
const ROOT_ID: &str = "weather-dashboard-root";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ID))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(|| AppState::new(Endpoints::new(API_BASE)));

    // Load the state list once on mount
    use_hook(move || {
        log::info!("Weather dashboard starting");
        dispatch::start(state);
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            h1 {
                style: "margin: 0 0 12px 0; font-size: 22px;",
                "Weather Dashboard"
            }

            div {
                style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end; margin-bottom: 8px;",
                StateSelector {}
                MonthSelector {}
            }

            AnalysisPanel {}
            ChartPanel {}
        }
    }
}
