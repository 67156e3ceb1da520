//! Token entities for the issuance and rotation protocol.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Refresh token record as persisted in the store.
///
/// A record is either present (live) or absent (consumed). Consumption is
/// deletion; there is no revoked or used flag. Records are never mutated in
/// place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Unique identifier, assigned on creation
    pub id: Uuid,

    /// User this token belongs to
    pub user_id: Uuid,

    /// SHA-256 hex digest of the opaque value held by the client.
    /// Unique across all live records.
    pub token_hash: String,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,
}

impl RefreshToken {
    /// Creates a new refresh token valid for `valid_for` from now.
    pub fn new(user_id: Uuid, token_hash: String, valid_for: Duration) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            user_id,
            token_hash,
            created_at: now,
            expires_at: now + valid_for,
        }
    }

    /// A token whose expiry is not strictly in the future is expired.
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// JWT claims embedded in every access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Issuer tag recording which grant produced the token
    pub iss: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims for an access token valid for `valid_secs` from now.
    pub fn new(user_id: Uuid, issuer: &str, valid_secs: i64) -> Self {
        let now = Utc::now();

        Self {
            sub: user_id.to_string(),
            iss: issuer.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(valid_secs)).timestamp(),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Parses the subject back into a user ID.
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Signed access token together with its validity window.
///
/// Ephemeral and never persisted; produced by the signer and consumed by the
/// response DTO.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    /// Signed, encoded token string
    pub token: String,

    /// Seconds remaining at issuance
    pub expires_in: i64,
}

/// The sole success output of a grant: a fresh access/refresh pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedTokens {
    /// Signed access token
    pub access_token: String,

    /// Raw (unhashed) replacement refresh-token value
    pub refresh_token: String,

    /// Access-token validity in seconds
    pub expires_in: i64,
}
