//! Credential verification contract.
//!
//! The user database lives behind a separate service; the issuer only ever
//! asks it one question. The concrete HTTP client lives in `idp_infra`.

use async_trait::async_trait;

use crate::domain::entities::user::VerifiedUser;
use crate::errors::VerificationError;

/// Remote credential check: email and password in, user identity out.
///
/// Callers must treat every error variant the same way: the protocol maps
/// all of them to an undifferentiated unauthorized response so the HTTP
/// client never learns why a login failed.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, email: &str, password: &str)
        -> Result<VerifiedUser, VerificationError>;
}
