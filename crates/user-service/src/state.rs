//! Application state shared across handlers.

use std::sync::Arc;

use microservices_core::User;

use crate::catalog;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Everything inside is read-only for the
/// lifetime of the process, so handlers never lock.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    service_name: String,
    users: Vec<User>,
}

impl AppState {
    /// Create state serving the given users under the given service name.
    #[must_use]
    pub fn new(service_name: impl Into<String>, users: Vec<User>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                service_name: service_name.into(),
                users,
            }),
        }
    }

    /// Name shown in the root status message.
    #[must_use]
    pub fn service_name(&self) -> &str {
        &self.inner.service_name
    }

    /// Users in response order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.inner.users
    }
}

impl Default for AppState {
    /// State backed by the built-in catalog.
    fn default() -> Self {
        Self::new(catalog::SERVICE_NAME, catalog::USERS.to_vec())
    }
}
