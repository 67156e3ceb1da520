//! Database implementations backed by PostgreSQL via SQLx.

pub mod postgres;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use idp_shared::config::DatabaseConfig;

use crate::InfrastructureError;

pub use postgres::PgTokenRepository;

/// Open a connection pool against the configured database.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, InfrastructureError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    tracing::info!(max_connections = config.max_connections, "database pool ready");
    Ok(pool)
}
