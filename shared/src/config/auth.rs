//! JWT signing configuration

use serde::{Deserialize, Serialize};

use super::{require_var, ConfigError};

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key for signing access tokens
    pub secret: String,

    /// Access token validity in seconds
    pub access_token_valid_duration: i64,

    /// Refresh token validity in seconds
    pub refresh_token_valid_duration: i64,
}

impl JwtConfig {
    /// Load from `JWT_SECRET`, `ACCESS_TOKEN_VALID_DURATION` and
    /// `REFRESH_TOKEN_VALID_DURATION`. All three are required.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = require_var("JWT_SECRET")?;
        let access_token_valid_duration = parse_duration("ACCESS_TOKEN_VALID_DURATION")?;
        let refresh_token_valid_duration = parse_duration("REFRESH_TOKEN_VALID_DURATION")?;

        Ok(Self {
            secret,
            access_token_valid_duration,
            refresh_token_valid_duration,
        })
    }
}

fn parse_duration(name: &'static str) -> Result<i64, ConfigError> {
    let raw = require_var(name)?;
    let seconds: i64 = raw.parse().map_err(|_| ConfigError::Invalid {
        name,
        message: format!("expected a number of seconds, got {:?}", raw),
    })?;
    if seconds <= 0 {
        return Err(ConfigError::Invalid {
            name,
            message: "duration must be positive".to_string(),
        });
    }
    Ok(seconds)
}
