//! Application configuration
//!
//! Every value is read from the environment exactly once, at startup.
//! Required variables fail fast with a [`ConfigError`] so a misconfigured
//! process never starts serving requests.

pub mod auth;
pub mod database;
pub mod server;
pub mod storage;
pub mod users;

use thiserror::Error;

pub use auth::JwtConfig;
pub use database::DatabaseConfig;
pub use server::ServerConfig;
pub use storage::StorageConfig;
pub use users::UserServiceConfig;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {message}")]
    Invalid {
        name: &'static str,
        message: String,
    },
}

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// JWT signing and validity settings
    pub jwt: JwtConfig,
    /// HTTP server bind settings
    pub server: ServerConfig,
    /// Database connection settings
    pub database: DatabaseConfig,
    /// Remote user service settings
    pub users: UserServiceConfig,
    /// Object storage settings
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load and validate the full configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            jwt: JwtConfig::from_env()?,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env()?,
            users: UserServiceConfig::from_env()?,
            storage: StorageConfig::from_env()?,
        })
    }
}

/// Read a required environment variable.
pub(crate) fn require_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(name))
}

/// Read an optional environment variable, parsed, falling back to a default.
pub(crate) fn var_or<T: std::str::FromStr>(name: &'static str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
