//! Root status payload.

use serde::{Deserialize, Serialize};

/// Body returned by `GET /` on every service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub message: String,
}

impl StatusMessage {
    /// Build the "is running" message for a service, e.g. `"User Service is running!"`.
    #[must_use]
    pub fn running(service_name: &str) -> Self {
        Self {
            message: format!("{service_name} is running!"),
        }
    }
}
