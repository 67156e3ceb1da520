//! Mapping of protocol errors onto HTTP responses.
//!
//! The mapping is verbatim: one error kind, one status code. The 401 body
//! stays generic whether the cause was bad credentials or a dead refresh
//! token.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;

use idp_core::errors::TokenError;

use crate::dto::ErrorResponse;

pub fn handle_token_error(error: TokenError) -> HttpResponse {
    match &error {
        TokenError::InvalidRequest { field } => ErrorResponse::new(
            "invalid_request",
            format!("missing required field: {field}"),
        )
        .to_response(StatusCode::BAD_REQUEST),

        TokenError::Unauthorized => {
            ErrorResponse::new("unauthorized", "invalid credentials or refresh token")
                .to_response(StatusCode::UNAUTHORIZED)
        }

        TokenError::Storage { .. } | TokenError::Signing { .. } => {
            log::error!("token issuance failed: {error}");
            ErrorResponse::new("internal_error", "an internal error occurred")
                .to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
