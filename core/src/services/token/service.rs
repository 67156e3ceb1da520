//! Token issuance and rotation.
//!
//! One entry point, [`TokenService::issue_token`], implements both grant
//! flows. The rotation sequence is strictly find → expiry check → delete →
//! insert → sign; the old record is consumed before its replacement exists,
//! so a failure mid-rotation leaves the session closed rather than doubled.

use std::sync::Arc;

use chrono::Duration;
use rand::Rng;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::entities::token::{IssuedTokens, RefreshToken};
use crate::domain::value_objects::grant::{GrantRequest, GrantType};
use crate::errors::{TokenError, TokenResult};
use crate::repositories::TokenRepository;
use crate::services::verification::CredentialVerifier;

use super::config::TokenConfig;
use super::signer::{Issuer, TokenSigner};

/// Length of generated refresh-token values.
const REFRESH_TOKEN_LEN: usize = 32;

/// The token issuer: orchestrates credential verification, the refresh-token
/// store and the signer for both grant types.
pub struct TokenService<R: TokenRepository, V: CredentialVerifier> {
    repository: Arc<R>,
    verifier: Arc<V>,
    signer: TokenSigner,
    config: TokenConfig,
}

impl<R: TokenRepository, V: CredentialVerifier> TokenService<R, V> {
    pub fn new(repository: Arc<R>, verifier: Arc<V>, config: TokenConfig) -> Self {
        let signer = TokenSigner::new(&config);
        Self {
            repository,
            verifier,
            signer,
            config,
        }
    }

    /// The signer minting this service's access tokens.
    pub fn signer(&self) -> &TokenSigner {
        &self.signer
    }

    /// Exchange a grant for a fresh access/refresh token pair.
    ///
    /// Structural validation happens first; no collaborator is called for a
    /// malformed request. Either a complete [`IssuedTokens`] is returned or
    /// an error, never a partial result.
    ///
    /// # Arguments
    ///
    /// * `request` - the decoded grant request
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedTokens)` - a new access token plus replacement refresh token
    /// * `Err(TokenError)` - one of the four protocol failure kinds
    pub async fn issue_token(&self, request: GrantRequest) -> TokenResult<IssuedTokens> {
        match request.grant_type {
            GrantType::Password => {
                let username = required(request.username.as_deref(), "username")?;
                let password = required(request.password.as_deref(), "password")?;
                self.password_grant(username, password).await
            }
            GrantType::RefreshToken => {
                let presented = required(request.refresh_token.as_deref(), "refresh_token")?;
                self.refresh_grant(presented).await
            }
        }
    }

    /// Password grant: verify credentials remotely, then issue a pair.
    async fn password_grant(&self, username: &str, password: &str) -> TokenResult<IssuedTokens> {
        let user = self
            .verifier
            .verify(username, password)
            .await
            .map_err(|e| {
                // The reason stays inside the process boundary.
                debug!(error = %e, "credential verification failed");
                TokenError::Unauthorized
            })?;

        self.issue_for_user(user.id).await
    }

    /// Refresh grant: validate and consume the presented token, then issue a
    /// replacement pair bound to the same user.
    async fn refresh_grant(&self, presented: &str) -> TokenResult<IssuedTokens> {
        let token_hash = hash_token(presented);

        let record = self
            .repository
            .find_token(&token_hash)
            .await?
            .ok_or(TokenError::Unauthorized)?;

        if record.is_expired() {
            return Err(TokenError::Unauthorized);
        }

        // Consumption precedes replacement. A concurrent request presenting
        // the same value either misses the row above or loses this delete;
        // at most one rotation of a given value ever succeeds.
        if !self.repository.delete_token(record.id).await? {
            warn!(token_id = %record.id, "refresh token consumed by concurrent request");
            return Err(TokenError::Unauthorized);
        }

        self.issue_for_user(record.user_id).await
    }

    /// Persist a new refresh token and mint the matching access token.
    async fn issue_for_user(&self, user_id: Uuid) -> TokenResult<IssuedTokens> {
        let value = generate_token_value();
        let record = RefreshToken::new(
            user_id,
            hash_token(&value),
            Duration::seconds(self.config.refresh_token_valid_secs),
        );

        self.repository.save_token(record).await?;

        let access = self.signer.mint(user_id, Issuer::Password)?;

        Ok(IssuedTokens {
            access_token: access.token,
            refresh_token: value,
            expires_in: access.expires_in,
        })
    }
}

/// SHA-256 hex digest of a refresh-token value, as persisted by the store.
pub fn hash_token(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hex::encode(hasher.finalize())
}

/// Generate an unguessable alphanumeric refresh-token value.
fn generate_token_value() -> String {
    let mut rng = rand::thread_rng();
    (0..REFRESH_TOKEN_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..62);
            match idx {
                0..10 => (b'0' + idx) as char,
                10..36 => (b'a' + idx - 10) as char,
                36..62 => (b'A' + idx - 36) as char,
                _ => unreachable!(),
            }
        })
        .collect()
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> TokenResult<&'a str> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(TokenError::InvalidRequest { field }),
    }
}
