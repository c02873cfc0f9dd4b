//! Dropdown selector for choosing a month of the selected state.

use crate::dispatch::dispatch;
use crate::state::AppState;
use dioxus::prelude::*;
use wx_core::DashboardEvent;

/// Month dropdown selector, disabled until a state is chosen.
#[component]
pub fn MonthSelector() -> Element {
    let state = use_context::<AppState>();
    let (options, selected, enabled) = {
        let dashboard = state.dashboard.read();
        (
            dashboard.month_options.clone(),
            dashboard.selected_month.clone(),
            dashboard.month_enabled,
        )
    };

    let on_change = move |evt: Event<FormData>| {
        dispatch(state, DashboardEvent::MonthSelected(evt.value()));
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "monthSelect",
                style: "font-weight: bold; margin-right: 8px;",
                "Month: "
            }
            select {
                id: "monthSelect",
                disabled: !enabled,
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
