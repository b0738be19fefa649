//! User Service library.
//!
//! Serves a status message at `/` and the fixed user list at `/users`.
//! The binary in `main.rs` only loads configuration, sets up telemetry
//! and binds the router built by [`app`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod routes;
pub mod state;

use axum::Router;

use crate::state::AppState;

/// Service label recorded on every request span.
pub const SERVICE_LABEL: &str = "user-service";

/// Build the full application router with middleware and fallback.
pub fn app(state: AppState) -> Router {
    microservices_server::into_app(routes::routes(), state, SERVICE_LABEL)
}
