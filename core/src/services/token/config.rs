//! Configuration for the token service

use jsonwebtoken::Algorithm;

use idp_shared::config::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// JWT signing secret
    pub secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Access token validity in seconds
    pub access_token_valid_secs: i64,
    /// Refresh token validity in seconds
    pub refresh_token_valid_secs: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            access_token_valid_secs: 3600,
            refresh_token_valid_secs: 7 * 24 * 60 * 60,
        }
    }
}

impl From<&JwtConfig> for TokenConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            algorithm: Algorithm::HS256,
            access_token_valid_secs: config.access_token_valid_duration,
            refresh_token_valid_secs: config.refresh_token_valid_duration,
        }
    }
}
