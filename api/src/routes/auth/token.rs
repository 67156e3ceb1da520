//! Handler for `POST /auth/token`.

use std::sync::Arc;

use actix_web::{web, HttpResponse};

use idp_core::repositories::TokenRepository;
use idp_core::services::token::TokenService;
use idp_core::services::verification::CredentialVerifier;

use crate::dto::{GetTokenRequest, GetTokenResponse};
use crate::handlers::handle_token_error;

/// Application state holding the shared token service.
pub struct AppState<R, V>
where
    R: TokenRepository,
    V: CredentialVerifier,
{
    pub token_service: Arc<TokenService<R, V>>,
}

/// Exchange a grant for a token pair.
///
/// # Request Body
///
/// ```json
/// {
///     "grant_type": "password" | "refresh_token",
///     "username": "...",
///     "password": "...",
///     "refresh_token": "..."
/// }
/// ```
///
/// # Responses
/// - 200: `{"access_token", "refresh_token", "expires_in"}`
/// - 400: missing fields for the given grant type
/// - 401: failed credential check, or unknown/expired/consumed refresh token
/// - 500: storage or signing failure
pub async fn get_token<R, V>(
    state: web::Data<AppState<R, V>>,
    request: web::Json<GetTokenRequest>,
) -> HttpResponse
where
    R: TokenRepository + 'static,
    V: CredentialVerifier + 'static,
{
    match state
        .token_service
        .issue_token(request.into_inner().into())
        .await
    {
        Ok(issued) => HttpResponse::Ok().json(GetTokenResponse::from(issued)),
        Err(error) => handle_token_error(error),
    }
}
