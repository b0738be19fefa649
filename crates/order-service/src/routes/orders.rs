//! Order list route.

use axum::{Json, extract::State};
use microservices_core::Order;
use tracing::instrument;

use crate::state::AppState;

/// `GET /orders` - return every order in catalog order.
///
/// Totals go out as JSON numbers; see [`Order::total`].
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Json<Vec<Order>> {
    let orders = state.orders().to_vec();
    tracing::debug!(count = orders.len(), "Listing orders");
    Json(orders)
}
