//! Object storage configuration

use serde::{Deserialize, Serialize};

use super::{require_var, ConfigError};

/// S3 object storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Bucket receiving uploaded files
    pub bucket: String,

    /// AWS region of the bucket
    pub region: String,
}

impl StorageConfig {
    /// Load from `AWS_DEFAULT_BUCKET` (required) and `AWS_REGION`.
    ///
    /// AWS credentials themselves are resolved by the SDK's default
    /// provider chain and are not handled here.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            bucket: require_var("AWS_DEFAULT_BUCKET")?,
            region: std::env::var("AWS_REGION").unwrap_or_else(|_| "eu-west-1".to_string()),
        })
    }
}
