//! Application configuration loaded from environment variables.

use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;

use crate::error::{ApiError, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Interface to bind the HTTP server on.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    // === Database (presence only) ===
    /// Database connection string, only checked for presence.
    #[serde(default)]
    pub database_url: Option<String>,

    /// Database name, only checked for presence.
    #[serde(default)]
    pub database_name: Option<String>,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_url: None,
            database_name: None,
            rust_log: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(ApiError::InvalidConfig("PORT must be non-zero".to_string()));
        }

        if self.host.trim().is_empty() {
            return Err(ApiError::InvalidConfig("HOST must not be empty".to_string()));
        }

        self.host.parse::<IpAddr>().map_err(|e| {
            ApiError::InvalidConfig(format!("HOST {:?} is not an IP address: {}", self.host, e))
        })?;

        Ok(())
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.host.parse().map_err(|e| {
            ApiError::InvalidConfig(format!("HOST {:?} is not an IP address: {}", self.host, e))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Whether `DATABASE_URL` was provided at startup.
    pub fn has_database_url(&self) -> bool {
        self.database_url.as_deref().is_some_and(|v| !v.is_empty())
    }

    /// Whether `DATABASE_NAME` was provided at startup.
    pub fn has_database_name(&self) -> bool {
        self.database_name.as_deref().is_some_and(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_sensible() {
        let config = Config::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.rust_log, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_port() {
        let config = Config {
            port: 0,
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_host() {
        let config = Config {
            host: "not-an-ip".to_string(),
            ..Config::default()
        };

        assert!(config.validate().is_err());
        assert!(config.bind_addr().is_err());
    }

    #[test]
    fn bind_addr_combines_host_and_port() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 9001,
            ..Config::default()
        };

        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:9001");
    }

    #[test]
    fn empty_database_values_count_as_missing() {
        let config = Config {
            database_url: Some(String::new()),
            database_name: Some("kir".to_string()),
            ..Config::default()
        };

        assert!(!config.has_database_url());
        assert!(config.has_database_name());
    }

    #[test]
    fn deserializes_from_env_pairs() {
        let vars = vec![
            ("PORT".to_string(), "8123".to_string()),
            ("DATABASE_URL".to_string(), "mongodb://localhost".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();

        assert_eq!(config.port, 8123);
        assert!(config.has_database_url());
        assert!(!config.has_database_name());
    }
}
