//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// External API credentials configuration.
    pub credentials: CredentialsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for external travel API credentials.
///
/// A missing key does not prevent startup: only the tools backed by that
/// provider return a configuration error when called.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Skyscanner partner API key for flight search.
    pub skyscanner_api_key: Option<String>,

    /// Met Office DataHub API key for weather forecasts.
    pub met_office_api_key: Option<String>,

    /// TripAdvisor Content API key for attractions and restaurants.
    pub tripadvisor_api_key: Option<String>,

    /// Referer header sent with TripAdvisor requests.
    pub tripadvisor_referer: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "skyscanner_api_key",
                &self.skyscanner_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field(
                "met_office_api_key",
                &self.met_office_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field(
                "tripadvisor_api_key",
                &self.tripadvisor_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("tripadvisor_referer", &self.tripadvisor_referer)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "travel-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            credentials: CredentialsConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server and transport settings use the `MCP_` prefix (for example
    /// `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_TRANSPORT`). The upstream API
    /// keys keep their provider-native names: `SKYSCANNER_API_KEY`,
    /// `MET_OFFICE_API_KEY`, `TRIPADVISOR_API_KEY`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config.credentials = CredentialsConfig::from_env();

        config
    }
}

impl CredentialsConfig {
    /// Load upstream API credentials from the environment.
    ///
    /// Each absent key is reported once at startup; the server still starts
    /// and only the dependent tools fail when invoked.
    pub fn from_env() -> Self {
        let skyscanner_api_key = load_key("SKYSCANNER_API_KEY", "flight search");
        let met_office_api_key = load_key("MET_OFFICE_API_KEY", "weather forecast");
        let tripadvisor_api_key = load_key("TRIPADVISOR_API_KEY", "attraction/restaurant search");
        let tripadvisor_referer = std::env::var("TRIPADVISOR_REFERER").ok();

        Self {
            skyscanner_api_key,
            met_office_api_key,
            tripadvisor_api_key,
            tripadvisor_referer,
        }
    }
}

fn load_key(var: &str, feature: &str) -> Option<String> {
    match std::env::var(var) {
        Ok(key) if !key.is_empty() => {
            info!("{} loaded from environment", var);
            Some(key)
        }
        _ => {
            warn!(
                "{} not set - {} tools will return a configuration error when called",
                var, feature
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("SKYSCANNER_API_KEY", "test_key_12345");
        }
        let config = Config::from_env();
        assert_eq!(
            config.credentials.skyscanner_api_key.as_deref(),
            Some("test_key_12345")
        );
        unsafe {
            std::env::remove_var("SKYSCANNER_API_KEY");
        }
    }

    #[test]
    fn test_credentials_absent_by_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("MET_OFFICE_API_KEY");
        }
        let config = Config::from_env();
        assert!(config.credentials.met_office_api_key.is_none());
    }

    #[test]
    fn test_credentials_empty_treated_as_absent() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("TRIPADVISOR_API_KEY", "");
        }
        let config = Config::from_env();
        assert!(config.credentials.tripadvisor_api_key.is_none());
        unsafe {
            std::env::remove_var("TRIPADVISOR_API_KEY");
        }
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig {
            skyscanner_api_key: Some("super_secret_key".to_string()),
            ..Default::default()
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }
}
