//! HTTP Server Configuration
//!
//! Configuration for the HTTP server including bind address, database path,
//! and the classification API endpoint.

use serde::{Deserialize, Serialize};

use crate::classify::CLASSIFY_API_BASE;

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path of the SQLite database file (default: "dev.db")
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Base URL of the classification API
    #[serde(default = "default_classify_base_url")]
    pub classify_base_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_database_path() -> String {
    "dev.db".to_string()
}

fn default_classify_base_url() -> String {
    CLASSIFY_API_BASE.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_path: default_database_path(),
            classify_base_url: default_classify_base_url(),
        }
    }
}

impl ServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_path, "dev.db");
        assert_eq!(config.classify_base_url, CLASSIFY_API_BASE);
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig::with_port(3000);
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: ServerConfig = serde_json::from_str(r#"{"port": 9090}"#).unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.database_path, "dev.db");
    }
}
