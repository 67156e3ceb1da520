use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;

use idp_api::app::create_app;
use idp_api::routes::auth::AppState;
use idp_api::routes::files::FilesState;
use idp_core::services::token::{
    TokenCleanupConfig, TokenCleanupService, TokenConfig, TokenService,
};
use idp_infra::database;
use idp_infra::database::PgTokenRepository;
use idp_infra::storage::S3ObjectStorage;
use idp_infra::users::RemoteCredentialVerifier;
use idp_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("starting idp token service");

    // Configuration is validated once, before anything else is constructed.
    let config = AppConfig::from_env()?;
    let bind_address = config.server.bind_address();

    // Wire the collaborators
    let pool = database::connect(&config.database).await?;
    let token_repository = Arc::new(PgTokenRepository::new(pool));
    let verifier = Arc::new(RemoteCredentialVerifier::new(&config.users)?);
    let token_service = Arc::new(TokenService::new(
        Arc::clone(&token_repository),
        verifier,
        TokenConfig::from(&config.jwt),
    ));
    let storage = Arc::new(S3ObjectStorage::from_config(&config.storage).await);

    // Reap expired refresh tokens in the background
    let cleanup_config = TokenCleanupConfig {
        interval_secs: std::env::var("CLEANUP_INTERVAL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3600),
        enabled: true,
    };
    TokenCleanupService::new(Arc::clone(&token_repository), cleanup_config).spawn();

    let app_state = web::Data::new(AppState { token_service });
    let files_state = web::Data::new(FilesState { storage });

    info!("server will bind to: {bind_address}");

    HttpServer::new(move || create_app(app_state.clone(), files_state.clone()))
        .bind(&bind_address)?
        .run()
        .await?;

    Ok(())
}
