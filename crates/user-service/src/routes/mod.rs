//! HTTP route handlers for the user service.
//!
//! # Route Structure
//!
//! ```text
//! GET  /        - Status message
//! GET  /users   - Fixed user list
//! ```

pub mod status;
pub mod users;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create all routes for the user service.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(status::home))
        .route("/users", get(users::list))
}
