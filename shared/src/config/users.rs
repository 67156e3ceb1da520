//! Remote user service configuration

use serde::{Deserialize, Serialize};

use super::{require_var, var_or, ConfigError};

/// Configuration for the remote credential-verification service
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserServiceConfig {
    /// Base URL of the user service, e.g. `https://users.internal`
    pub base_url: String,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl UserServiceConfig {
    /// Load from `USERS_HOST` (required) and `USERS_REQUEST_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: require_var("USERS_HOST")?,
            request_timeout_secs: var_or("USERS_REQUEST_TIMEOUT_SECS", 10),
        })
    }

    /// URL of the login endpoint used for credential verification.
    pub fn login_url(&self) -> String {
        format!("{}/users/login", self.base_url.trim_end_matches('/'))
    }
}
