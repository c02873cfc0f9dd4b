//! Reusable Dioxus RSX components for the weather dashboard.

mod analysis_panel;
mod chart_panel;
mod month_selector;
mod stat_card;
mod state_selector;

pub use analysis_panel::AnalysisPanel;
pub use chart_panel::ChartPanel;
pub use month_selector::MonthSelector;
pub use stat_card::StatCardView;
pub use state_selector::StateSelector;
