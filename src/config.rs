//! Environment-backed configuration with validation.
//!
//! One `Config` value is built per invocation and passed down by
//! parameter; nothing reads process-wide mutable state after startup.

use std::env;
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid port number
    #[error("invalid port: must be between 1 and 65535")]
    InvalidPort,

    /// HTTP and gRPC listeners would collide
    #[error("HTTP and gRPC ports must differ")]
    PortConflict,

    /// Invalid timeout value
    #[error("invalid {name}: must be greater than 0")]
    InvalidTimeout {
        /// Name of the offending setting.
        name: &'static str,
    },

    /// Environment variable parse error
    #[error("failed to parse environment variable {name}: {reason}")]
    ParseError {
        /// Variable name.
        name: String,
        /// Parse failure description.
        reason: String,
    },
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address for both listeners.
    pub host: String,
    /// HTTP listener port.
    pub http_port: u16,
    /// gRPC listener port.
    pub grpc_port: u16,
    /// Upper bound on a single credential lookup, in seconds.
    pub auth_timeout_secs: u64,
    /// Graceful shutdown window, in seconds.
    pub shutdown_timeout_secs: u64,
    /// Emit logs as JSON instead of human-readable lines.
    pub log_json: bool,
}

impl Config {
    /// Loads configuration from environment variables with validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            http_port: parse_env("HTTP_PORT", 8080)?,
            grpc_port: parse_env("GRPC_PORT", 9090)?,
            auth_timeout_secs: parse_env("AUTH_TIMEOUT", 5)?,
            shutdown_timeout_secs: parse_env("SHUTDOWN_TIMEOUT", 30)?,
            log_json: parse_env("LOG_JSON", false)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.http_port == 0 || self.grpc_port == 0 {
            return Err(ConfigError::InvalidPort);
        }
        if self.http_port == self.grpc_port {
            return Err(ConfigError::PortConflict);
        }
        if self.auth_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                name: "auth_timeout_secs",
            });
        }
        if self.shutdown_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                name: "shutdown_timeout_secs",
            });
        }
        Ok(())
    }
}

/// Parse an environment variable with a default value.
fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val.parse().map_err(|e: T::Err| ConfigError::ParseError {
            name: name.to_string(),
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config_base() -> Config {
        Config {
            host: "localhost".to_string(),
            http_port: 8080,
            grpc_port: 9090,
            auth_timeout_secs: 5,
            shutdown_timeout_secs: 30,
            log_json: false,
        }
    }

    #[test]
    fn test_config_validation_invalid_port() {
        let mut config = test_config_base();
        config.http_port = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidPort)));
    }

    #[test]
    fn test_config_validation_port_conflict() {
        let mut config = test_config_base();
        config.grpc_port = config.http_port;
        assert!(matches!(config.validate(), Err(ConfigError::PortConflict)));
    }

    #[test]
    fn test_config_validation_zero_auth_timeout() {
        let mut config = test_config_base();
        config.auth_timeout_secs = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTimeout { name: "auth_timeout_secs" })
        ));
    }

    #[test]
    fn test_config_validation_zero_shutdown_timeout() {
        let mut config = test_config_base();
        config.shutdown_timeout_secs = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTimeout { .. })
        ));
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(test_config_base().validate().is_ok());
    }
}
