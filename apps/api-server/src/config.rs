//! API server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::net::{IpAddr, SocketAddr};

use serde::{Deserialize, Serialize};

use devops_core::DEFAULT_SERVICE_NAME;

/// API server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind (default: 0.0.0.0)
    pub host: IpAddr,

    /// HTTP port (default: 5000)
    pub port: u16,

    /// Name reported by `/health`
    pub service_name: String,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// ## Variables
    /// - `HOST` - bind address (default: `0.0.0.0`)
    /// - `PORT` - HTTP port (default: `5000`)
    /// - `SERVICE_NAME` - health check service name (default: `devops-testing-app`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn load_from<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = ServerConfig {
            host: lookup("HOST")
                .unwrap_or_else(|| "0.0.0.0".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("HOST".to_string()))?,

            port: lookup("PORT")
                .unwrap_or_else(|| "5000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?,

            service_name: lookup("SERVICE_NAME")
                .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
        };

        if config.service_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue("SERVICE_NAME".to_string()));
        }

        Ok(config)
    }

    /// Socket address the server binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 5000,
            service_name: DEFAULT_SERVICE_NAME.to_string(),
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::load_from(lookup(&[])).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.service_name, "devops-testing-app");
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:5000");
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::load_from(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("SERVICE_NAME", "staging-app"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.service_name, "staging-app");
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::load_from(lookup(&[("PORT", "not-a-port")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for PORT");
    }

    #[test]
    fn test_invalid_host() {
        let err = ServerConfig::load_from(lookup(&[("HOST", "localhost:80")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref v) if v == "HOST"));
    }
}
