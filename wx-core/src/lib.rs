//! Core types and selection logic for the weather dashboard.
//!
//! Nothing in this crate touches the browser: the backend response models,
//! endpoint paths, stat-card derivation and the selection cascade are all
//! plain Rust so they can be tested natively and reused by the WASM UI.

pub mod charts;
pub mod controller;
pub mod endpoints;
pub mod models;
pub mod stat_card;

pub use controller::{Dashboard, DashboardEvent, Request, SelectOption};
pub use endpoints::Endpoints;
