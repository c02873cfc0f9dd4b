//! Glue between the dashboard model and the network.
//!
//! `dispatch` applies an event to the `Dashboard` signal and spawns one task
//! per request it returns. Each task feeds its decoded response back through
//! `dispatch`, which is how the months loader triggers the chart load.

use crate::fetch::{fetch_json, FetchError};
use crate::state::AppState;
use dioxus::prelude::*;
use wx_core::{DashboardEvent, Request};

/// Apply `event` and issue the requests it triggers.
pub fn dispatch(state: AppState, event: DashboardEvent) {
    let mut dashboard = state.dashboard;
    let requests = dashboard.write().handle(event);
    for request in requests {
        issue(state, request);
    }
}

/// Issue the requests the dashboard needs on startup.
pub fn start(state: AppState) {
    let requests = state.dashboard.peek().start();
    for request in requests {
        issue(state, request);
    }
}

fn issue(state: AppState, request: Request) {
    let url = request.url(&state.endpoints);
    log::info!("Loading {} from {}", request.describe(), url);

    spawn(async move {
        match load(&request, &url).await {
            Ok(event) => dispatch(state, event),
            // Best-effort: leave the page as it is.
            Err(e) => log::error!("Error loading {}: {}", request.describe(), e),
        }
    });
}

async fn load(request: &Request, url: &str) -> Result<DashboardEvent, FetchError> {
    let event = match request {
        Request::States => DashboardEvent::StatesLoaded(fetch_json(url).await?),
        Request::Months { state } => DashboardEvent::MonthsLoaded {
            state: state.clone(),
            months: fetch_json(url).await?,
        },
        Request::Analysis { state } => DashboardEvent::AnalysisLoaded {
            state: state.clone(),
            analysis: fetch_json(url).await?,
        },
        Request::Charts { state, month } => DashboardEvent::ChartsLoaded {
            state: state.clone(),
            month: month.clone(),
            bundle: fetch_json(url).await?,
        },
    };
    Ok(event)
}
