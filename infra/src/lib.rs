//! # idp infrastructure
//!
//! Concrete implementations of the contracts the core defines:
//! PostgreSQL refresh-token persistence, the remote credential-verification
//! client, and S3 object storage. Nothing in this crate contains protocol
//! logic.

pub mod database;
pub mod storage;
pub mod users;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Object storage error
    #[error("object storage error: {0}")]
    Storage(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}
