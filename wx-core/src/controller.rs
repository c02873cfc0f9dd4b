//! The state → months/analysis → month → charts selection cascade.
//!
//! [`Dashboard`] owns everything the page displays. The UI feeds it
//! [`DashboardEvent`]s (user selections and backend responses) and issues
//! whatever [`Request`]s it hands back. No I/O happens here.
//!
//! Every response event names the selection it was requested for. A
//! response for a selection the user has since moved away from is dropped,
//! so a slow reply can never overwrite a newer one.

use crate::charts::ChartImages;
use crate::endpoints::Endpoints;
use crate::models::{Analysis, ChartBundle};
use crate::stat_card::AnalysisView;

/// Label of the empty option at the top of the state selector.
pub const STATE_PLACEHOLDER: &str = "-- Select a State --";
/// Label of the lone month option while no state is chosen.
pub const MONTH_PLACEHOLDER: &str = "Select a state first";

/// One entry of a `<select>` control.
#[derive(Debug, PartialEq, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn placeholder(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
        }
    }

    fn item(value: &str) -> Self {
        Self {
            value: value.to_string(),
            label: value.to_string(),
        }
    }
}

/// An HTTP GET the dashboard wants issued.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Request {
    States,
    Months { state: String },
    Analysis { state: String },
    Charts { state: String, month: String },
}

impl Request {
    pub fn url(&self, endpoints: &Endpoints) -> String {
        match self {
            Request::States => endpoints.states(),
            Request::Months { state } => endpoints.months(state),
            Request::Analysis { state } => endpoints.analysis(state),
            Request::Charts { state, month } => endpoints.charts(state, month),
        }
    }

    /// Short description for log lines.
    pub fn describe(&self) -> String {
        match self {
            Request::States => "states".to_string(),
            Request::Months { state } => format!("months for {}", state),
            Request::Analysis { state } => format!("analysis for {}", state),
            Request::Charts { state, month } => format!("charts for {} {}", state, month),
        }
    }
}

/// Inputs to the cascade.
#[derive(Debug, PartialEq, Clone)]
pub enum DashboardEvent {
    /// The user picked a state; empty means the placeholder was chosen.
    StateSelected(String),
    /// The user (or the months loader) picked a month.
    MonthSelected(String),
    StatesLoaded(Vec<String>),
    MonthsLoaded { state: String, months: Vec<String> },
    AnalysisLoaded { state: String, analysis: Analysis },
    ChartsLoaded { state: String, month: String, bundle: ChartBundle },
}

/// Everything the dashboard page shows.
#[derive(Debug, PartialEq, Clone)]
pub struct Dashboard {
    pub state_options: Vec<SelectOption>,
    pub selected_state: String,
    pub month_options: Vec<SelectOption>,
    pub selected_month: String,
    pub month_enabled: bool,
    pub analysis_visible: bool,
    /// State name shown above the stat cards
    pub analysis_heading: String,
    pub analysis: AnalysisView,
    pub charts_visible: bool,
    pub charts: ChartImages,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self {
            state_options: vec![SelectOption::placeholder(STATE_PLACEHOLDER)],
            selected_state: String::new(),
            month_options: vec![SelectOption::placeholder(MONTH_PLACEHOLDER)],
            selected_month: String::new(),
            month_enabled: false,
            analysis_visible: false,
            analysis_heading: String::new(),
            analysis: AnalysisView::Cards(Vec::new()),
            charts_visible: false,
            charts: ChartImages::default(),
        }
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests to issue once the page is ready.
    pub fn start(&self) -> Vec<Request> {
        vec![Request::States]
    }

    /// Apply one event and return the requests it triggers.
    pub fn handle(&mut self, event: DashboardEvent) -> Vec<Request> {
        match event {
            DashboardEvent::StateSelected(state) => self.select_state(state),
            DashboardEvent::MonthSelected(month) => self.select_month(month),
            DashboardEvent::StatesLoaded(states) => {
                self.populate_states(&states);
                Vec::new()
            }
            DashboardEvent::MonthsLoaded { state, months } => self.populate_months(state, &months),
            DashboardEvent::AnalysisLoaded { state, analysis } => {
                self.show_analysis(state, &analysis);
                Vec::new()
            }
            DashboardEvent::ChartsLoaded {
                state,
                month,
                bundle,
            } => {
                self.show_charts(&state, &month, &bundle);
                Vec::new()
            }
        }
    }

    fn select_state(&mut self, state: String) -> Vec<Request> {
        self.selected_state = state;
        self.selected_month.clear();

        if self.selected_state.is_empty() {
            self.month_enabled = false;
            self.month_options = vec![SelectOption::placeholder(MONTH_PLACEHOLDER)];
            self.analysis_visible = false;
            self.charts_visible = false;
            return Vec::new();
        }

        // Enabled while the months request is still in flight.
        self.month_enabled = true;
        vec![
            Request::Months {
                state: self.selected_state.clone(),
            },
            Request::Analysis {
                state: self.selected_state.clone(),
            },
        ]
    }

    fn select_month(&mut self, month: String) -> Vec<Request> {
        self.selected_month = month;
        if self.selected_state.is_empty() || self.selected_month.is_empty() {
            return Vec::new();
        }

        self.charts_visible = true;
        self.charts = ChartImages::default();
        vec![Request::Charts {
            state: self.selected_state.clone(),
            month: self.selected_month.clone(),
        }]
    }

    fn populate_states(&mut self, states: &[String]) {
        self.state_options = std::iter::once(SelectOption::placeholder(STATE_PLACEHOLDER))
            .chain(states.iter().map(|s| SelectOption::item(s)))
            .collect();
    }

    fn populate_months(&mut self, state: String, months: &[String]) -> Vec<Request> {
        if state != self.selected_state {
            log::debug!("Dropping stale months for {}", state);
            return Vec::new();
        }

        self.month_options = months.iter().map(|m| SelectOption::item(m)).collect();
        let first = months.first().cloned().unwrap_or_default();
        self.select_month(first)
    }

    fn show_analysis(&mut self, state: String, analysis: &Analysis) {
        if state != self.selected_state {
            log::debug!("Dropping stale analysis for {}", state);
            return;
        }

        self.analysis = AnalysisView::from_analysis(analysis);
        self.analysis_heading = state;
        self.analysis_visible = true;
    }

    fn show_charts(&mut self, state: &str, month: &str, bundle: &ChartBundle) {
        if state != self.selected_state || month != self.selected_month {
            log::debug!("Dropping stale charts for {} {}", state, month);
            return;
        }

        self.charts = ChartImages::from_bundle(bundle);
    }
}
