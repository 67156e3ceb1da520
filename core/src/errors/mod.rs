//! Error taxonomy for the token-issuance protocol.
//!
//! Every failure a grant can produce is one of the four [`TokenError`]
//! kinds; the API layer maps kinds to HTTP status codes verbatim. The core
//! never retries internally and never reports partial success.

use thiserror::Error;

/// Failures of the token-issuance protocol.
#[derive(Error, Debug)]
pub enum TokenError {
    /// Malformed or incomplete grant payload (400).
    #[error("invalid grant request: missing {field}")]
    InvalidRequest { field: &'static str },

    /// Bad credentials, or an unknown, expired or already-consumed refresh
    /// token (401). Deliberately undifferentiated so callers cannot probe
    /// which of those it was.
    #[error("unauthorized")]
    Unauthorized,

    /// Persistence unavailable or a constraint violation (500).
    #[error("storage failure: {message}")]
    Storage { message: String },

    /// Access-token encoding failed (500).
    #[error("signing failure: {message}")]
    Signing { message: String },
}

pub type TokenResult<T> = Result<T, TokenError>;

/// Failures reported by the credential-verification service.
///
/// The issuer treats every variant identically (mapped to
/// [`TokenError::Unauthorized`]); the distinction exists only for logging
/// inside the process boundary.
#[derive(Error, Debug)]
pub enum VerificationError {
    #[error("credentials rejected by user service")]
    InvalidCredentials,

    #[error("user service unreachable: {message}")]
    Remote { message: String },

    #[error("user service response not understood: {message}")]
    Decode { message: String },
}
