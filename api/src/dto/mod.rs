pub mod auth_dto;
pub mod error_dto;

pub use auth_dto::{GetTokenRequest, GetTokenResponse};
pub use error_dto::ErrorResponse;
