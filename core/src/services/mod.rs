//! Business services containing the protocol logic.

pub mod token;
pub mod verification;

// Re-export commonly used types
pub use token::{
    Issuer, TokenCleanupConfig, TokenCleanupService, TokenConfig, TokenService, TokenSigner,
};
pub use verification::CredentialVerifier;
