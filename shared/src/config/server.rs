//! HTTP server configuration

use serde::{Deserialize, Serialize};

use super::var_or;

/// HTTP server bind configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,

    /// Bind port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Load from `SERVER_HOST` / `SERVER_PORT`, defaulting to 127.0.0.1:8080.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: var_or("SERVER_PORT", 8080),
        }
    }

    /// The `host:port` string handed to the HTTP server.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
