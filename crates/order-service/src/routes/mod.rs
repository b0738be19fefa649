//! HTTP route handlers for the order service.
//!
//! # Route Structure
//!
//! ```text
//! GET  /        - Status message
//! GET  /orders  - Fixed order list
//! ```

pub mod status;
pub mod orders;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create all routes for the order service.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(status::home))
        .route("/orders", get(orders::list))
}
