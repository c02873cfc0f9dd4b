//! Dropdown selector for choosing a state.

use crate::dispatch::dispatch;
use crate::state::AppState;
use dioxus::prelude::*;
use wx_core::DashboardEvent;

/// State dropdown selector.
/// Choosing a state loads its months and analysis; choosing the
/// placeholder resets the dependent controls.
#[component]
pub fn StateSelector() -> Element {
    let state = use_context::<AppState>();
    let options = state.dashboard.read().state_options.clone();
    let selected = state.dashboard.read().selected_state.clone();

    let on_change = move |evt: Event<FormData>| {
        dispatch(state, DashboardEvent::StateSelected(evt.value()));
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "stateSelect",
                style: "font-weight: bold; margin-right: 8px;",
                "State: "
            }
            select {
                id: "stateSelect",
                onchange: on_change,
                for opt in options.iter() {
                    option {
                        value: "{opt.value}",
                        selected: opt.value == selected,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}
