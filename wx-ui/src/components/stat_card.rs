//! A single metric card in the analysis grid.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct StatCardViewProps {
    pub title: String,
    pub value: String,
    /// Line under the value (e.g., "on 2024-W20"); omitted when empty
    #[props(default = String::new())]
    pub context: String,
}

#[component]
pub fn StatCardView(props: StatCardViewProps) -> Element {
    rsx! {
        div {
            class: "stat-card",
            style: "padding: 12px 16px; border: 1px solid #ddd; border-radius: 6px; background: #fafafa; min-width: 160px;",
            p {
                class: "stat-card-title",
                style: "margin: 0; font-size: 12px; color: #666;",
                "{props.title}"
            }
            p {
                class: "stat-card-value",
                style: "margin: 4px 0; font-size: 22px; font-weight: bold;",
                "{props.value}"
            }
            if !props.context.is_empty() {
                p {
                    class: "stat-card-context",
                    style: "margin: 0; font-size: 12px; color: #888;",
                    "{props.context}"
                }
            }
        }
    }
}
