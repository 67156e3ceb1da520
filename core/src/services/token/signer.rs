//! Access-token signing.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::{AccessToken, Claims};
use crate::errors::{TokenError, TokenResult};

use super::config::TokenConfig;

/// Grant origin recorded in the `iss` claim of minted access tokens.
///
/// Refresh-issued tokens carry `Password` as well: a rotated session keeps
/// the trust level of the password login that started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Issuer {
    Password,
    Facebook,
}

impl Issuer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Issuer::Password => "password",
            Issuer::Facebook => "facebook",
        }
    }
}

/// Stateless JWT signer.
///
/// Holds the precomputed keys and the configured access-token validity;
/// deterministic apart from the embedded timestamps.
pub struct TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    access_token_valid_secs: i64,
}

impl TokenSigner {
    pub fn new(config: &TokenConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            algorithm: config.algorithm,
            access_token_valid_secs: config.access_token_valid_secs,
        }
    }

    /// Mint a signed access token for `user_id`.
    ///
    /// Encoding failure is an internal error, never a client fault.
    pub fn mint(&self, user_id: Uuid, issuer: Issuer) -> TokenResult<AccessToken> {
        let claims = Claims::new(user_id, issuer.as_str(), self.access_token_valid_secs);
        let header = Header::new(self.algorithm);

        let token = encode(&header, &claims, &self.encoding_key).map_err(|e| {
            TokenError::Signing {
                message: e.to_string(),
            }
        })?;

        Ok(AccessToken {
            token,
            expires_in: self.access_token_valid_secs,
        })
    }

    /// Verify signature and expiry of an access token and return its claims.
    pub fn decode(&self, token: &str) -> TokenResult<Claims> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_issuer(&[Issuer::Password.as_str(), Issuer::Facebook.as_str()]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer() -> TokenSigner {
        TokenSigner::new(&TokenConfig::default())
    }

    #[test]
    fn minted_token_round_trips() {
        let signer = signer();
        let user_id = Uuid::new_v4();

        let access = signer.mint(user_id, Issuer::Password).unwrap();
        assert_eq!(access.expires_in, 3600);
        assert!(!access.token.is_empty());

        let claims = signer.decode(&access.token).unwrap();
        assert_eq!(claims.user_id().unwrap(), user_id);
        assert_eq!(claims.iss, "password");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn foreign_signature_is_rejected() {
        let signer = signer();
        let other = TokenSigner::new(&TokenConfig {
            secret: "a-different-secret".to_string(),
            ..TokenConfig::default()
        });

        let access = other.mint(Uuid::new_v4(), Issuer::Password).unwrap();
        assert!(matches!(
            signer.decode(&access.token),
            Err(TokenError::Unauthorized)
        ));
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(matches!(
            signer().decode("not-a-jwt"),
            Err(TokenError::Unauthorized)
        ));
    }

    #[test]
    fn validity_window_follows_config() {
        let signer = TokenSigner::new(&TokenConfig {
            access_token_valid_secs: 120,
            ..TokenConfig::default()
        });

        let access = signer.mint(Uuid::new_v4(), Issuer::Password).unwrap();
        assert_eq!(access.expires_in, 120);

        let claims = signer.decode(&access.token).unwrap();
        assert_eq!(claims.exp - claims.iat, 120);
    }
}
