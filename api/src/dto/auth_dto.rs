//! Wire DTOs for the token endpoint.

use serde::{Deserialize, Serialize};

use idp_core::domain::entities::token::IssuedTokens;
use idp_core::domain::value_objects::grant::{GrantRequest, GrantType};

/// Body of `POST /auth/token`.
///
/// Which optional fields are required depends on `grant_type`; that check
/// belongs to the issuer, not the decoder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetTokenRequest {
    pub grant_type: GrantType,
    pub username: Option<String>,
    pub password: Option<String>,
    pub refresh_token: Option<String>,
}

impl From<GetTokenRequest> for GrantRequest {
    fn from(request: GetTokenRequest) -> Self {
        GrantRequest {
            grant_type: request.grant_type,
            username: request.username,
            password: request.password,
            refresh_token: request.refresh_token,
        }
    }
}

/// Success body of `POST /auth/token`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetTokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}

impl From<IssuedTokens> for GetTokenResponse {
    fn from(issued: IssuedTokens) -> Self {
        Self {
            access_token: issued.access_token,
            refresh_token: issued.refresh_token,
            expires_in: issued.expires_in,
        }
    }
}
