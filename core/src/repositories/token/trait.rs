//! Refresh-token store contract.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::TokenResult;

/// Persistence contract for refresh tokens.
///
/// The store holds no business logic: validation, expiry checks and the
/// rotation sequence belong to the token service. Implementations must make
/// `delete_token` atomic: when several callers race to delete the same row,
/// at most one may observe `true`. That primitive is what guarantees a
/// refresh-token value can only ever be rotated once.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Look up a live token by the hash of its client-held value.
    ///
    /// Absence is `Ok(None)`, never an error: a missing row means the value
    /// never existed, was already consumed, or was reaped after expiry, and
    /// the store cannot (and must not) tell those apart.
    ///
    /// # Arguments
    /// * `token_hash` - SHA-256 hex digest of the presented value
    ///
    /// # Returns
    /// * `Ok(Some(RefreshToken))` - token found
    /// * `Ok(None)` - no live token with the given hash
    /// * `Err(TokenError::Storage)` - backend failure
    async fn find_token(&self, token_hash: &str) -> TokenResult<Option<RefreshToken>>;

    /// Persist a new token record.
    ///
    /// Fails with [`TokenError::Storage`] on a duplicate hash or when the
    /// backend is unavailable.
    ///
    /// [`TokenError::Storage`]: crate::errors::TokenError::Storage
    async fn save_token(&self, token: RefreshToken) -> TokenResult<RefreshToken>;

    /// Delete a token record by id, reporting whether a live row was
    /// actually removed.
    ///
    /// `Ok(false)` means the record was already gone: the caller raced
    /// another consumer and lost. Deleting twice is a protocol bug on the
    /// caller's side; the store surfaces it rather than hiding it.
    ///
    /// # Returns
    /// * `Ok(true)` - this caller removed the row
    /// * `Ok(false)` - the row was no longer there
    /// * `Err(TokenError::Storage)` - backend failure
    async fn delete_token(&self, id: Uuid) -> TokenResult<bool>;

    /// Remove every expired token record, returning how many were deleted.
    ///
    /// Used by the periodic cleanup service. Clients cannot distinguish a
    /// reaped record from a consumed one.
    async fn delete_expired(&self) -> TokenResult<usize>;
}
