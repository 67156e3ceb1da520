//! PostgreSQL implementation of the refresh-token store.
//!
//! Schema (see `migrations/`):
//!
//! ```sql
//! CREATE TABLE refresh_tokens (
//!     id         UUID PRIMARY KEY,
//!     user_id    UUID NOT NULL,
//!     token_hash TEXT NOT NULL UNIQUE,
//!     created_at TIMESTAMPTZ NOT NULL,
//!     expires_at TIMESTAMPTZ NOT NULL
//! );
//! ```
//!
//! Rotation relies on `DELETE ... WHERE id = $1` being atomic: when two
//! requests race on the same token, only one delete reports an affected row.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use idp_core::domain::entities::token::RefreshToken;
use idp_core::errors::{TokenError, TokenResult};
use idp_core::repositories::TokenRepository;

/// PostgreSQL-backed token store.
pub struct PgTokenRepository {
    pool: PgPool,
}

impl PgTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_token(row: &sqlx::postgres::PgRow) -> TokenResult<RefreshToken> {
        Ok(RefreshToken {
            id: row.try_get("id").map_err(storage_error)?,
            user_id: row.try_get("user_id").map_err(storage_error)?,
            token_hash: row.try_get("token_hash").map_err(storage_error)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(storage_error)?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(storage_error)?,
        })
    }
}

#[async_trait]
impl TokenRepository for PgTokenRepository {
    async fn find_token(&self, token_hash: &str) -> TokenResult<Option<RefreshToken>> {
        let query = r#"
            SELECT id, user_id, token_hash, created_at, expires_at
            FROM refresh_tokens
            WHERE token_hash = $1
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(token_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_token(&row)?)),
            None => Ok(None),
        }
    }

    async fn save_token(&self, token: RefreshToken) -> TokenResult<RefreshToken> {
        let query = r#"
            INSERT INTO refresh_tokens (id, user_id, token_hash, created_at, expires_at)
            VALUES ($1, $2, $3, $4, $5)
        "#;

        // The unique index on token_hash turns a value collision into a
        // constraint violation rather than a second live copy.
        sqlx::query(query)
            .bind(token.id)
            .bind(token.user_id)
            .bind(&token.token_hash)
            .bind(token.created_at)
            .bind(token.expires_at)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(token)
    }

    async fn delete_token(&self, id: Uuid) -> TokenResult<bool> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_expired(&self) -> TokenResult<usize> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE expires_at <= $1")
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(result.rows_affected() as usize)
    }
}

fn storage_error(e: impl std::fmt::Display) -> TokenError {
    TokenError::Storage {
        message: e.to_string(),
    }
}
