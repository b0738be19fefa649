//! Order service configuration loaded from environment variables.
//!
//! Every variable is optional. With nothing set the service binds
//! `0.0.0.0:8081` and Sentry stays disabled.
//!
//! # Environment Variables
//!
//! - `ORDER_SERVICE_HOST` - Bind address (default: 0.0.0.0)
//! - `ORDER_SERVICE_PORT` - Listen port (default: 8081)
//!
//! Logging and Sentry variables are listed in `microservices_server::config`.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use microservices_server::config::{ConfigError, TelemetryConfig, parse_or};

/// Order service configuration.
#[derive(Debug, Clone)]
pub struct OrderServiceConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Logging and error tracking
    pub telemetry: TelemetryConfig,
}

impl Default for OrderServiceConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8081,
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl OrderServiceConfig {
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
            host: parse_or(&lookup, "ORDER_SERVICE_HOST", defaults.host)?,
            port: parse_or(&lookup, "ORDER_SERVICE_PORT", defaults.port)?,
            telemetry: TelemetryConfig::from_lookup(&lookup)?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_bind_all_interfaces_on_8081() {
        let config = OrderServiceConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8081");
        assert_eq!(config.socket_addr(), OrderServiceConfig::default().socket_addr());
        assert!(config.telemetry.sentry_dsn.is_none());
    }

    #[test]
    fn test_host_and_port_overrides() {
        let config = OrderServiceConfig::from_lookup(lookup_from(&[
            ("ORDER_SERVICE_HOST", "127.0.0.1"),
            ("ORDER_SERVICE_PORT", "9090"),
        ]))
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9090");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err =
            OrderServiceConfig::from_lookup(lookup_from(&[("ORDER_SERVICE_PORT", "eighty")]))
                .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "ORDER_SERVICE_PORT"));
    }

    #[test]
    fn test_invalid_host_is_rejected() {
        let result = OrderServiceConfig::from_lookup(lookup_from(&[("ORDER_SERVICE_HOST", "nope")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_user_service_variables_are_ignored() {
        let config =
            OrderServiceConfig::from_lookup(lookup_from(&[("USER_SERVICE_PORT", "1")])).unwrap();
        assert_eq!(config.port, 8081);
    }
}
