//! HTTP client for the remote credential-verification service.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use idp_core::domain::entities::user::VerifiedUser;
use idp_core::errors::VerificationError;
use idp_core::services::verification::CredentialVerifier;
use idp_shared::config::UserServiceConfig;

use crate::InfrastructureError;

/// Login request body sent to the user service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Credential verifier backed by the user service's `POST /users/login`.
pub struct RemoteCredentialVerifier {
    client: reqwest::Client,
    login_url: String,
}

impl RemoteCredentialVerifier {
    pub fn new(config: &UserServiceConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(InfrastructureError::Http)?;

        Ok(Self {
            client,
            login_url: config.login_url(),
        })
    }
}

#[async_trait]
impl CredentialVerifier for RemoteCredentialVerifier {
    async fn verify(
        &self,
        email: &str,
        password: &str,
    ) -> Result<VerifiedUser, VerificationError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .client
            .post(&self.login_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| VerificationError::Remote {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            debug!(%status, "user service rejected login");
            return Err(VerificationError::InvalidCredentials);
        }

        response
            .json::<VerifiedUser>()
            .await
            .map_err(|e| VerificationError::Decode {
                message: e.to_string(),
            })
    }
}
