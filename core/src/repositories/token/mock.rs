//! Counting mock of the token store for protocol tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::{TokenError, TokenResult};

use super::r#trait::TokenRepository;

/// In-memory store that records how it was invoked, so tests can assert on
/// the exact sequence of store calls a grant produced.
pub struct MockTokenRepository {
    tokens: Arc<RwLock<HashMap<String, RefreshToken>>>,
    pub find_calls: AtomicUsize,
    pub save_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    fail_saves: AtomicBool,
}

impl MockTokenRepository {
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
            find_calls: AtomicUsize::new(0),
            save_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
            fail_saves: AtomicBool::new(false),
        }
    }

    /// Seed the store with an existing record.
    pub async fn seed(&self, token: RefreshToken) {
        self.tokens
            .write()
            .await
            .insert(token.token_hash.clone(), token);
    }

    /// Make every subsequent `save_token` fail with a storage error.
    pub fn fail_saves(&self) {
        self.fail_saves.store(true, Ordering::SeqCst);
    }

    pub fn find_count(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    pub fn save_count(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    pub fn delete_count(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    /// The most recently saved record, if any.
    pub async fn last_saved(&self) -> Option<RefreshToken> {
        let tokens = self.tokens.read().await;
        tokens
            .values()
            .max_by_key(|token| token.created_at)
            .cloned()
    }
}

impl Default for MockTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn find_token(&self, token_hash: &str) -> TokenResult<Option<RefreshToken>> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        let tokens = self.tokens.read().await;
        Ok(tokens.get(token_hash).cloned())
    }

    async fn save_token(&self, token: RefreshToken) -> TokenResult<RefreshToken> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(TokenError::Storage {
                message: "mock store unavailable".to_string(),
            });
        }

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
        self.delete_calls.fetch_add(1, Ordering::SeqCst);

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
