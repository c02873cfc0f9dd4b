//! Application state managed via Dioxus context.
//!
//! `AppState` is provided once by the root component with
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.

use dioxus::prelude::*;
use wx_core::{Dashboard, Endpoints};

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Everything the page shows, driven by `dispatch`
    pub dashboard: Signal<Dashboard>,
    /// Where requests are sent; fixed for the lifetime of the page
    pub endpoints: Endpoints,
}

impl AppState {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            dashboard: Signal::new(Dashboard::new()),
            endpoints,
        }
    }
}
