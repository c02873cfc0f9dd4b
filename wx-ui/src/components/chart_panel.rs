//! Panel with the three server-rendered charts for a state and month.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
struct ChartFigureProps {
    id: String,
    /// Caption and alt text, e.g. "Temperature (°C)"
    caption: String,
    /// `data:` URL, or empty while loading or after a failed load
    src: String,
}

#[component]
fn ChartFigure(props: ChartFigureProps) -> Element {
    rsx! {
        figure {
            style: "margin: 0; flex: 1 1 320px;",
            img {
                id: "{props.id}",
                src: "{props.src}",
                alt: "{props.caption}",
                style: "width: 100%; min-height: 240px; background: #f4f4f4;",
            }
            figcaption {
                style: "font-size: 13px; color: #444; text-align: center;",
                "{props.caption}"
            }
        }
    }
}

/// Temperature, humidity and wind charts for the selected month.
/// Hidden until a month is chosen.
#[component]
pub fn ChartPanel() -> Element {
    let state = use_context::<AppState>();
    let (visible, month, charts) = {
        let dashboard = state.dashboard.read();
        (
            dashboard.charts_visible,
            dashboard.selected_month.clone(),
            dashboard.charts.clone(),
        )
    };

    if !visible {
        return rsx! {};
    }

    rsx! {
        section {
            id: "chartsSection",
            style: "margin: 16px 0;",
            h3 {
                style: "margin: 0 0 8px 0; font-size: 16px;",
                "Weekly trends for {month}"
            }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 16px;",
                ChartFigure {
                    id: "temperatureChart".to_string(),
                    caption: "Temperature (°C)".to_string(),
                    src: charts.temperature,
                }
                ChartFigure {
                    id: "humidityChart".to_string(),
                    caption: "Humidity (%)".to_string(),
                    src: charts.humidity,
                }
                ChartFigure {
                    id: "windChart".to_string(),
                    caption: "Wind Speed (km/h)".to_string(),
                    src: charts.wind,
                }
            }
        }
    }
}
