//! Summary statistics panel for the selected state.

use super::StatCardView;
use crate::state::AppState;
use dioxus::prelude::*;
use wx_core::stat_card::AnalysisView;

/// Renders the stat cards, or the backend's error text in their place.
/// Hidden until the first analysis for the current state arrives.
#[component]
pub fn AnalysisPanel() -> Element {
    let state = use_context::<AppState>();
    let (visible, heading, analysis) = {
        let dashboard = state.dashboard.read();
        (
            dashboard.analysis_visible,
            dashboard.analysis_heading.clone(),
            dashboard.analysis.clone(),
        )
    };

    if !visible {
        return rsx! {};
    }

    let body = match analysis {
        AnalysisView::Message(message) => rsx! {
            p { "{message}" }
        },
        AnalysisView::Cards(cards) => rsx! {
            for card in cards {
                StatCardView {
                    title: card.title,
                    value: card.value,
                    context: card.context.unwrap_or_default(),
                }
            }
        },
    };

    rsx! {
        section {
            id: "analysisSection",
            style: "margin: 16px 0;",
            h2 {
                id: "stateName",
                style: "margin: 0 0 8px 0; font-size: 18px;",
                "{heading}"
            }
            div {
                class: "stats-grid",
                style: "display: flex; flex-wrap: wrap; gap: 12px;",
                {body}
            }
        }
    }
}
