//! User service configuration loaded from environment variables.
//!
//! Every variable is optional. With nothing set the service binds
//! `0.0.0.0:8080` and Sentry stays disabled.
//!
//! # Environment Variables
//!
//! - `USER_SERVICE_HOST` - Bind address (default: 0.0.0.0)
//! - `USER_SERVICE_PORT` - Listen port (default: 8080)
//!
//! Logging and Sentry variables are listed in `microservices_server::config`.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use microservices_server::config::{ConfigError, TelemetryConfig, parse_or};

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Logging and error tracking
    pub telemetry: TelemetryConfig,
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the host, port, or log format is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Unset variables keep the values from [`Default`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the host, port, or log format is malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            host: parse_or(&lookup, "USER_SERVICE_HOST", defaults.host)?,
            port: parse_or(&lookup, "USER_SERVICE_PORT", defaults.port)?,
            telemetry: TelemetryConfig::from_lookup(&lookup)?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
