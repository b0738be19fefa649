//! Root status route.

use axum::{Json, extract::State};
use microservices_core::StatusMessage;

use crate::state::AppState;

/// `GET /` - report that the service is up.
pub async fn home(State(state): State<AppState>) -> Json<StatusMessage> {
    Json(StatusMessage::running(state.service_name()))
}
