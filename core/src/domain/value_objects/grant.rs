//! Grant request presented to the token issuer.

use serde::{Deserialize, Serialize};

/// Supported grant types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
    Password,
    RefreshToken,
}

/// A decoded token request, validated structurally by the issuer before any
/// collaborator is called. Which optional fields are required depends on the
/// grant type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantRequest {
    pub grant_type: GrantType,
    pub username: Option<String>,
    pub password: Option<String>,
    pub refresh_token: Option<String>,
}

impl GrantRequest {
    /// A password grant carrying the given credentials.
    pub fn password(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            grant_type: GrantType::Password,
            username: Some(username.into()),
            password: Some(password.into()),
            refresh_token: None,
        }
    }

    /// A refresh grant presenting a previously issued token value.
    pub fn refresh(token: impl Into<String>) -> Self {
        Self {
            grant_type: GrantType::RefreshToken,
            username: None,
            password: None,
            refresh_token: Some(token.into()),
        }
    }
}
