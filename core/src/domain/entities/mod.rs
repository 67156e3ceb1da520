//! Domain entities.

pub mod token;
pub mod user;

pub use token::{AccessToken, Claims, IssuedTokens, RefreshToken};
pub use user::VerifiedUser;
