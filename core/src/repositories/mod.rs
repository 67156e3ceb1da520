//! Repository contracts and reference implementations.

pub mod token;

pub use token::{InMemoryTokenRepository, TokenRepository};

#[cfg(test)]
pub use token::MockTokenRepository;
