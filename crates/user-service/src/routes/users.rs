//! User list route.

use axum::{Json, extract::State};
use microservices_core::User;
use tracing::instrument;

use crate::state::AppState;

/// `GET /users` - return every user in catalog order.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Json<Vec<User>> {
    let users = state.users().to_vec();
    tracing::debug!(count = users.len(), "Listing users");
    Json(users)
}
