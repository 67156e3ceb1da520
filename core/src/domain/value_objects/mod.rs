//! Value objects exchanged with the API layer.

pub mod grant;

pub use grant::{GrantRequest, GrantType};
