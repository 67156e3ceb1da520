//! Application factory.
//!
//! Assembles middleware, routes and state into the actix-web `App`. Generic
//! over the store, verifier and storage contracts so integration tests can
//! wire in-memory implementations.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use idp_core::repositories::TokenRepository;
use idp_core::services::verification::CredentialVerifier;
use idp_infra::storage::ObjectStorage;

use crate::middleware::create_cors;
use crate::routes::auth::token::get_token;
use crate::routes::auth::AppState;
use crate::routes::files::{upload_file, FilesState};
use crate::routes::status::status;

/// Create and configure the application with all dependencies.
pub fn create_app<R, V, B>(
    app_state: web::Data<AppState<R, V>>,
    files_state: web::Data<FilesState<B>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: TokenRepository + 'static,
    V: CredentialVerifier + 'static,
    B: ObjectStorage + 'static,
{
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .app_data(files_state)
        .wrap(Logger::default())
        .wrap(cors)
        // Liveness probe
        .route("/status", web::get().to(status))
        // Token endpoint
        .service(
            web::scope("/auth").route("/token", web::post().to(get_token::<R, V>)),
        )
        // File upload (independent of the token protocol)
        .route("/files/{name}", web::post().to(upload_file::<B>))
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "the requested resource was not found"
    }))
}
