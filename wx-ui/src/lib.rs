//! Shared Dioxus layer for the weather dashboard.
//!
//! This crate provides:
//! - `state`: Reactive AppState with Dioxus Signals
//! - `fetch`: JSON GET over the browser `fetch` API
//! - `dispatch`: Runs dashboard events and issues the requests they produce
//! - `components`: RSX components (selectors, analysis and chart panels)

pub mod components;
pub mod dispatch;
pub mod fetch;
pub mod state;
