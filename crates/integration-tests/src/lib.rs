//! Integration tests for the user and order services.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p microservices-integration-tests
//! ```
//!
//! Each test binds a real listener on `127.0.0.1:0`, so no fixed ports are
//! needed and the tests can run in parallel.
//!
//! Set `USER_SERVICE_URL` / `ORDER_SERVICE_URL` and run with `--ignored` to
//! exercise already-deployed services instead.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A service running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Bind `app` on an ephemeral port and serve it in the background.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn spawn(app: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no local address");

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, handle }
    }

    /// Start the user service with its built-in catalog.
    pub async fn user_service() -> Self {
        use microservices_user_service::{app, state::AppState};
        Self::spawn(app(AppState::default())).await
    }

    /// Start the order service with its built-in catalog.
    pub async fn order_service() -> Self {
        use microservices_order_service::{app, state::AppState};
        Self::spawn(app(AppState::default())).await
    }

    /// Absolute URL for `path` on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Stop serving. Connections to the address fail afterwards.
    pub async fn stop(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }
}

/// Base URL from the environment, for tests against deployed services.
#[must_use]
pub fn base_url(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}
