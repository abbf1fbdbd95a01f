//! # JWT Token Management
//!
//! JSON Web Token generation and validation. Validation is stateless; the
//! role claim is trusted once the signature checks out.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::errors::{AuthError, AuthResult};
use super::user::{Role, User};

/// JWT claims for access tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject (user ID)
    pub sub: String,

    /// Account role
    pub role: Role,

    /// Issued at timestamp (Unix epoch seconds)
    pub iat: i64,

    /// Expiration timestamp (Unix epoch seconds)
    pub exp: i64,

    /// Audience
    pub aud: String,

    /// Issuer
    pub iss: String,
}

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing (256-bit minimum recommended)
    pub secret: String,

    /// Access token lifetime
    pub token_ttl: Duration,

    /// Issuer identifier
    pub issuer: String,

    /// Audience identifier
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "CHANGE_THIS_SECRET_IN_PRODUCTION".to_string(),
            token_ttl: Duration::hours(1),
            issuer: "campusd".to_string(),
            audience: "campusd".to_string(),
        }
    }
}

/// JWT manager for token generation and validation
#[derive(Clone)]
pub struct JwtManager {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtManager {
    /// Create a new JWT manager with the given configuration
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Generate an access token for a user
    ///
    /// Only the user ID and role go into the token, never the password hash.
    pub fn generate_token(&self, user: &User) -> AuthResult<String> {
        let now = Utc::now();
        let exp = now + self.config.token_ttl;

        let claims = JwtClaims {
            sub: user.id.to_string(),
            role: user.role,
            iat: now.timestamp(),
            exp: exp.timestamp(),
            aud: self.config.audience.clone(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AuthError::TokenGenerationFailed)
    }

    /// Validate an access token and extract its claims
    pub fn validate_token(&self, token: &str) -> AuthResult<JwtClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[&self.config.issuer]);

        let token_data =
            decode::<JwtClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AuthError::InvalidSignature
                    }
                    _ => AuthError::MalformedToken,
                }
            })?;

        Ok(token_data.claims)
    }

    /// Token lifetime in seconds, for the login/register response body
    pub fn ttl_seconds(&self) -> i64 {
        self.config.token_ttl.num_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::crypto::PasswordPolicy;
    use uuid::Uuid;

    fn test_manager() -> JwtManager {
        JwtManager::new(JwtConfig {
            secret: "test_secret_key_for_testing_only".to_string(),
            ..JwtConfig::default()
        })
    }

    fn test_user(role: Role) -> User {
        User::new(
            "Test User".to_string(),
            "test@example.edu".to_string(),
            "password123",
            role,
            &PasswordPolicy::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_token_generation_and_validation() {
        let manager = test_manager();
        let user = test_user(Role::Teacher);

        let token = manager.generate_token(&user).unwrap();
        assert_eq!(token.split('.').count(), 3);

        let claims = manager.validate_token(&token).unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.role, Role::Teacher);
    }

    #[test]
    fn test_invalid_token_rejected() {
        let manager = test_manager();
        let result = manager.validate_token("invalid.token.here");
        assert!(matches!(
            result,
            Err(AuthError::MalformedToken) | Err(AuthError::InvalidSignature)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let manager1 = JwtManager::new(JwtConfig {
            secret: "secret_one".to_string(),
            ..JwtConfig::default()
        });
        let manager2 = JwtManager::new(JwtConfig {
            secret: "secret_two".to_string(),
            ..JwtConfig::default()
        });

        let token = manager1.generate_token(&test_user(Role::Admin)).unwrap();
        assert!(matches!(
            manager2.validate_token(&token),
            Err(AuthError::InvalidSignature)
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let secret = "test_secret";
        let encoding_key = EncodingKey::from_secret(secret.as_bytes());

        let now = Utc::now();
        let claims = JwtClaims {
            sub: Uuid::new_v4().to_string(),
            role: Role::Student,
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
            aud: "campusd".to_string(),
            iss: "campusd".to_string(),
        };
        let token = encode(&Header::default(), &claims, &encoding_key).unwrap();

        let manager = JwtManager::new(JwtConfig {
            secret: secret.to_string(),
            ..JwtConfig::default()
        });
        assert!(matches!(
            manager.validate_token(&token),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn test_token_does_not_contain_password_hash() {
        let manager = test_manager();
        let user = test_user(Role::Admin);
        let token = manager.generate_token(&user).unwrap();
        assert!(!token.contains(&user.password_hash));
    }
}
