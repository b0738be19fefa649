//! Order Service - fixed order list over HTTP.
//!
//! This binary serves on port 8081 by default.
//!
//! # Routes
//!
//! - `GET /` - `{"message": "Order Service is running!"}`
//! - `GET /orders` - the three catalog orders
//! - `GET /health` - liveness probe
//!
//! The service keeps no state beyond its catalog and never calls the user
//! service.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::process::ExitCode;

use microservices_server::telemetry;
use microservices_order_service::{SERVICE_LABEL, app, config::OrderServiceConfig, state::AppState};

#[tokio::main]
#[allow(clippy::print_stderr)]
async fn main() -> ExitCode {
    // Load configuration from environment (needed for Sentry init)
    let config = match OrderServiceConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            // Tracing is not initialized yet
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = telemetry::init_sentry(&config.telemetry);
    telemetry::init_tracing(
        &config.telemetry,
        "microservices_order_service=info,microservices_server=info,tower_http=debug",
    );

    let app = app(AppState::default());

    let addr = config.socket_addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "Failed to bind to address");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("{SERVICE_LABEL} listening on http://{addr}");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(telemetry::shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
