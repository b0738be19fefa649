//! Microservices Server - HTTP plumbing shared by both services.
//!
//! Each service owns its routes, catalog and bind address. Everything around
//! those lives here:
//!
//! - [`into_app`] - wraps a service's routes with `/health`, the 404 fallback
//!   and the middleware stack
//! - [`error`] - `AppError` and its JSON responses
//! - [`middleware`] - request IDs and `TraceLayer` hooks
//! - [`telemetry`] - Sentry, tracing subscriber, shutdown signal
//! - [`config`] - settings every service loads the same way

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod telemetry;

use axum::{Router, middleware::from_fn, routing::get};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::middleware::{HttpMakeSpan, HttpOnResponse, request_id_middleware};

/// Wrap a service's routes into the full application.
///
/// Adds `GET /health`, the not-found fallback, panic catching, request IDs,
/// request tracing and the Sentry layers, then binds `state`.
pub fn into_app<S>(routes: Router<S>, state: S, service: &'static str) -> Router
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .merge(routes)
        .fallback(error::not_found)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(HttpMakeSpan::new(service))
                .on_response(HttpOnResponse),
        )
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. There are no dependencies to check.
async fn health() -> &'static str {
    "ok"
}
