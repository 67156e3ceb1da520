//! In-memory reference implementation of the token store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::{TokenError, TokenResult};

use super::r#trait::TokenRepository;

/// Reference token store backed by a `HashMap` keyed by token hash.
///
/// Suitable for tests and single-process deployments. The write lock makes
/// `delete_token` atomic, so concurrent rotations of the same value resolve
/// to a single winner exactly as with the database-backed store.
pub struct InMemoryTokenRepository {
    tokens: Arc<RwLock<HashMap<String, RefreshToken>>>,
}

impl InMemoryTokenRepository {
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of live records; used by tests and the status probe.
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tokens.read().await.is_empty()
    }
}

impl Default for InMemoryTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn find_token(&self, token_hash: &str) -> TokenResult<Option<RefreshToken>> {
        let tokens = self.tokens.read().await;
        Ok(tokens.get(token_hash).cloned())
    }

    async fn save_token(&self, token: RefreshToken) -> TokenResult<RefreshToken> {
        let mut tokens = self.tokens.write().await;

        if tokens.contains_key(&token.token_hash) {
            return Err(TokenError::Storage {
                message: "refresh token value collision".to_string(),
            });
        }

        tokens.insert(token.token_hash.clone(), token.clone());
        Ok(token)
    }

    async fn delete_token(&self, id: Uuid) -> TokenResult<bool> {
        let mut tokens = self.tokens.write().await;

        let key = tokens
            .iter()
            .find(|(_, token)| token.id == id)
            .map(|(hash, _)| hash.clone());

        match key {
            Some(hash) => Ok(tokens.remove(&hash).is_some()),
            None => Ok(false),
        }
    }

    async fn delete_expired(&self) -> TokenResult<usize> {
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();

        tokens.retain(|_, token| !token.is_expired());

        Ok(before - tokens.len())
    }
}
