//! # idp core
//!
//! Core token-issuance protocol for the idp backend. This crate contains the
//! domain entities, the grant/rotation state machine, the refresh-token store
//! contract, the access-token signer, and the error taxonomy. It performs no
//! HTTP or database I/O of its own; those live in the `idp_infra` and
//! `idp_api` crates.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::token::{AccessToken, Claims, IssuedTokens, RefreshToken};
pub use domain::entities::user::VerifiedUser;
pub use domain::value_objects::grant::{GrantRequest, GrantType};
pub use errors::{TokenError, TokenResult, VerificationError};
pub use repositories::{InMemoryTokenRepository, TokenRepository};
pub use services::token::{TokenCleanupConfig, TokenCleanupService, TokenConfig, TokenService, TokenSigner};
pub use services::verification::CredentialVerifier;
