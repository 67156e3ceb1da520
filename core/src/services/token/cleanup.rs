//! Periodic reaping of expired refresh tokens.
//!
//! Expired records already fail validation; the reaper only keeps the store
//! from growing without bound. Clients cannot tell a reaped record from a
//! consumed one.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};

use crate::errors::TokenResult;
use crate::repositories::TokenRepository;

/// Configuration for the cleanup service
#[derive(Debug, Clone)]
pub struct TokenCleanupConfig {
    /// How often to run cleanup, in seconds
    pub interval_secs: u64,
    /// Whether automatic cleanup is enabled
    pub enabled: bool,
}

impl Default for TokenCleanupConfig {
    fn default() -> Self {
        Self {
            interval_secs: 3600,
            enabled: true,
        }
    }
}

/// Background service deleting expired refresh tokens.
pub struct TokenCleanupService<R: TokenRepository + 'static> {
    repository: Arc<R>,
    config: TokenCleanupConfig,
}

impl<R: TokenRepository> TokenCleanupService<R> {
    pub fn new(repository: Arc<R>, config: TokenCleanupConfig) -> Self {
        Self { repository, config }
    }

    /// Run a single cleanup cycle, returning how many rows were reaped.
    pub async fn run_cleanup(&self) -> TokenResult<usize> {
        if !self.config.enabled {
            return Ok(0);
        }

        let deleted = self.repository.delete_expired().await?;
        if deleted > 0 {
            info!(deleted, "reaped expired refresh tokens");
        }
        Ok(deleted)
    }

    /// Spawn the periodic cleanup loop on the current runtime.
    pub fn spawn(self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval =
                tokio::time::interval(Duration::from_secs(self.config.interval_secs.max(1)));
            // The first tick fires immediately; skip it so startup stays quiet.
            interval.tick().await;

            loop {
                interval.tick().await;
                if let Err(e) = self.run_cleanup().await {
                    error!(error = %e, "token cleanup cycle failed");
                }
            }
        })
    }
}
