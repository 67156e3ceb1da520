//! User identity as reported by the remote user service.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Successful login response from the credential-verification service.
///
/// The token protocol only uses `id`; the remaining fields mirror what the
/// user service returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}
