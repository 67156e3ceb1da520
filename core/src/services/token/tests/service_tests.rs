//! Protocol tests for token issuance and rotation.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::domain::value_objects::grant::{GrantRequest, GrantType};
use crate::errors::TokenError;
use crate::repositories::{InMemoryTokenRepository, MockTokenRepository, TokenRepository};
use crate::services::token::service::hash_token;
use crate::services::token::{TokenConfig, TokenService};

use super::mocks::MockCredentialVerifier;

fn service(
    repository: Arc<MockTokenRepository>,
    verifier: Arc<MockCredentialVerifier>,
) -> TokenService<MockTokenRepository, MockCredentialVerifier> {
    TokenService::new(repository, verifier, TokenConfig::default())
}

/// A live record for `user_id` presentable as the value `"Token"`.
fn live_record(user_id: Uuid) -> RefreshToken {
    RefreshToken::new(user_id, hash_token("Token"), Duration::seconds(60))
}

#[tokio::test]
async fn password_grant_returns_token_pair() {
    let repo = Arc::new(MockTokenRepository::new());
    let user_id = Uuid::new_v4();
    let verifier = Arc::new(MockCredentialVerifier::succeeding(user_id));
    let service = service(Arc::clone(&repo), Arc::clone(&verifier));

    let issued = service
        .issue_token(GrantRequest::password("arts.jimmy@example.com", "Wachtwoord123!?"))
        .await
        .unwrap();

    assert_eq!(issued.expires_in, 3600);
    assert!(!issued.access_token.is_empty());
    assert!(!issued.refresh_token.is_empty());
    assert_eq!(repo.save_count(), 1);
    assert_eq!(
        verifier.last_credentials(),
        Some((
            "arts.jimmy@example.com".to_string(),
            "Wachtwoord123!?".to_string()
        ))
    );
}

#[tokio::test]
async fn password_grant_persists_token_for_verified_user() {
    let repo = Arc::new(MockTokenRepository::new());
    let user_id = Uuid::new_v4();
    let verifier = Arc::new(MockCredentialVerifier::succeeding(user_id));
    let service = service(Arc::clone(&repo), verifier);

    let issued = service
        .issue_token(GrantRequest::password("arts.jimmy@example.com", "pw"))
        .await
        .unwrap();

    let saved = repo.last_saved().await.expect("a record was saved");
    assert_eq!(saved.user_id, user_id);
    assert_eq!(saved.token_hash, hash_token(&issued.refresh_token));
    assert!(saved.expires_at > Utc::now());
}

#[tokio::test]
async fn password_grant_without_password_fails_before_any_call() {
    let repo = Arc::new(MockTokenRepository::new());
    let verifier = Arc::new(MockCredentialVerifier::succeeding(Uuid::new_v4()));
    let service = service(Arc::clone(&repo), Arc::clone(&verifier));

    let request = GrantRequest {
        grant_type: GrantType::Password,
        username: Some("arts.jimmy@example.com".to_string()),
        password: None,
        refresh_token: None,
    };
    let result = service.issue_token(request).await;

    assert!(matches!(
        result,
        Err(TokenError::InvalidRequest { field: "password" })
    ));
    assert_eq!(verifier.verify_count(), 0);
    assert_eq!(repo.save_count(), 0);
}

#[tokio::test]
async fn password_grant_without_username_fails_before_any_call() {
    let repo = Arc::new(MockTokenRepository::new());
    let verifier = Arc::new(MockCredentialVerifier::succeeding(Uuid::new_v4()));
    let service = service(repo, Arc::clone(&verifier));

    let request = GrantRequest {
        grant_type: GrantType::Password,
        username: None,
        password: Some("pw".to_string()),
        refresh_token: None,
    };
    let result = service.issue_token(request).await;

    assert!(matches!(
        result,
        Err(TokenError::InvalidRequest { field: "username" })
    ));
    assert_eq!(verifier.verify_count(), 0);
}

#[tokio::test]
async fn rejected_credentials_become_unauthorized() {
    let repo = Arc::new(MockTokenRepository::new());
    let verifier = Arc::new(MockCredentialVerifier::failing());
    let service = service(Arc::clone(&repo), Arc::clone(&verifier));

    let result = service
        .issue_token(GrantRequest::password("arts.jimmy@example.com", "wrong"))
        .await;

    assert!(matches!(result, Err(TokenError::Unauthorized)));
    assert_eq!(verifier.verify_count(), 1);
    assert_eq!(repo.save_count(), 0);
}

#[tokio::test]
async fn unknown_refresh_token_is_unauthorized() {
    let repo = Arc::new(MockTokenRepository::new());
    let verifier = Arc::new(MockCredentialVerifier::failing());
    let service = service(Arc::clone(&repo), verifier);

    let result = service.issue_token(GrantRequest::refresh("Token")).await;

    assert!(matches!(result, Err(TokenError::Unauthorized)));
    assert_eq!(repo.find_count(), 1);
    assert_eq!(repo.save_count(), 0);
    assert_eq!(repo.delete_count(), 0);
}

#[tokio::test]
async fn refresh_grant_rotates_the_presented_token() {
    let repo = Arc::new(MockTokenRepository::new());
    let user_id = Uuid::new_v4();
    repo.seed(live_record(user_id)).await;
    let verifier = Arc::new(MockCredentialVerifier::failing());
    let service = service(Arc::clone(&repo), verifier);

    let issued = service
        .issue_token(GrantRequest::refresh("Token"))
        .await
        .unwrap();

    assert_eq!(repo.delete_count(), 1);
    assert_eq!(repo.save_count(), 1);
    assert_ne!(issued.refresh_token, "Token");

    // The replacement is bound to the consumed record's user.
    let saved = repo.last_saved().await.unwrap();
    assert_eq!(saved.user_id, user_id);

    // So is the minted access token.
    let claims = service.signer().decode(&issued.access_token).unwrap();
    assert_eq!(claims.user_id().unwrap(), user_id);
    assert_eq!(claims.iss, "password");
}

#[tokio::test]
async fn expired_refresh_token_is_unauthorized_without_delete() {
    let repo = Arc::new(MockTokenRepository::new());
    let mut record = live_record(Uuid::new_v4());
    record.expires_at = DateTime::from_timestamp(0, 0).unwrap();
    repo.seed(record).await;
    let verifier = Arc::new(MockCredentialVerifier::failing());
    let service = service(Arc::clone(&repo), verifier);

    let result = service.issue_token(GrantRequest::refresh("Token")).await;

    assert!(matches!(result, Err(TokenError::Unauthorized)));
    assert_eq!(repo.delete_count(), 0);
    assert_eq!(repo.save_count(), 0);
}

#[tokio::test]
async fn refresh_grant_without_token_fails_before_any_call() {
    let repo = Arc::new(MockTokenRepository::new());
    let verifier = Arc::new(MockCredentialVerifier::failing());
    let service = service(Arc::clone(&repo), verifier);

    let request = GrantRequest {
        grant_type: GrantType::RefreshToken,
        username: None,
        password: None,
        refresh_token: Some(String::new()),
    };
    let result = service.issue_token(request).await;

    assert!(matches!(
        result,
        Err(TokenError::InvalidRequest {
            field: "refresh_token"
        })
    ));
    assert_eq!(repo.find_count(), 0);
}

#[tokio::test]
async fn a_refresh_token_is_single_use() {
    let repo = Arc::new(MockTokenRepository::new());
    let user_id = Uuid::new_v4();
    let verifier = Arc::new(MockCredentialVerifier::succeeding(user_id));
    let service = service(Arc::clone(&repo), verifier);

    let first = service
        .issue_token(GrantRequest::password("arts.jimmy@example.com", "pw"))
        .await
        .unwrap();

    let second = service
        .issue_token(GrantRequest::refresh(first.refresh_token.clone()))
        .await
        .unwrap();
    assert_ne!(second.refresh_token, first.refresh_token);

    let replay = service
        .issue_token(GrantRequest::refresh(first.refresh_token))
        .await;
    assert!(matches!(replay, Err(TokenError::Unauthorized)));
}

#[tokio::test]
async fn storage_failure_is_surfaced_not_retried() {
    let repo = Arc::new(MockTokenRepository::new());
    repo.fail_saves();
    let verifier = Arc::new(MockCredentialVerifier::succeeding(Uuid::new_v4()));
    let service = service(Arc::clone(&repo), verifier);

    let result = service
        .issue_token(GrantRequest::password("arts.jimmy@example.com", "pw"))
        .await;

    assert!(matches!(result, Err(TokenError::Storage { .. })));
    assert_eq!(repo.save_count(), 1);
}

#[tokio::test]
async fn failed_rotation_still_consumes_the_old_token() {
    let repo = Arc::new(MockTokenRepository::new());
    repo.seed(live_record(Uuid::new_v4())).await;
    repo.fail_saves();
    let verifier = Arc::new(MockCredentialVerifier::failing());
    let service = service(Arc::clone(&repo), verifier);

    // Delete commits, insert fails: the request errors...
    let result = service.issue_token(GrantRequest::refresh("Token")).await;
    assert!(matches!(result, Err(TokenError::Storage { .. })));

    // ...and the old token is gone for good (fail closed).
    let replay = service.issue_token(GrantRequest::refresh("Token")).await;
    assert!(matches!(replay, Err(TokenError::Unauthorized)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_rotation_has_exactly_one_winner() {
    let repo = Arc::new(InMemoryTokenRepository::new());
    let user_id = Uuid::new_v4();
    repo.save_token(live_record(user_id)).await.unwrap();

    let verifier = Arc::new(MockCredentialVerifier::failing());
    let service = Arc::new(TokenService::new(
        Arc::clone(&repo),
        verifier,
        TokenConfig::default(),
    ));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let service = Arc::clone(&service);
        handles.push(tokio::spawn(async move {
            service.issue_token(GrantRequest::refresh("Token")).await
        }));
    }

    let mut winners = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(issued) => {
                winners += 1;
                assert_ne!(issued.refresh_token, "Token");
            }
            Err(TokenError::Unauthorized) => {}
            Err(other) => panic!("loser failed open: {other}"),
        }
    }

    assert_eq!(winners, 1);
    // One replacement record exists, bound to the same user.
    assert_eq!(repo.len().await, 1);
}
