//! # Auth Service
//!
//! Registration, login, and boundary authentication composed over the
//! user repository and the JWT manager.

use std::sync::Arc;

use axum::http::HeaderMap;

use super::context::{bearer_token, AuthContext};
use super::crypto::PasswordPolicy;
use super::errors::{AuthError, AuthResult};
use super::jwt::{JwtConfig, JwtManager};
use super::user::{LoginRequest, RegisterRequest, User, UserRepository};

/// Auth service combining user storage and token management
pub struct AuthService<U: UserRepository> {
    user_repo: Arc<U>,
    jwt_manager: JwtManager,
    password_policy: PasswordPolicy,
}

impl<U: UserRepository> AuthService<U> {
    pub fn new(user_repo: U, jwt_config: JwtConfig, password_policy: PasswordPolicy) -> Self {
        Self {
            user_repo: Arc::new(user_repo),
            jwt_manager: JwtManager::new(jwt_config),
            password_policy,
        }
    }

    /// Register a new account and issue a token for it
    pub fn register(&self, request: RegisterRequest) -> AuthResult<(User, String)> {
        if self.user_repo.email_exists(&request.email)? {
            return Err(AuthError::EmailAlreadyExists);
        }

        let user = User::new(
            request.name,
            request.email,
            &request.password,
            request.role,
            &self.password_policy,
        )?;
        self.user_repo.create(&user)?;

        let token = self.jwt_manager.generate_token(&user)?;
        Ok((user, token))
    }

    /// Authenticate credentials and issue a token
    pub fn login(&self, request: LoginRequest) -> AuthResult<(User, String)> {
        let user = self
            .user_repo
            .find_by_email(&request.email)?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.verify_password(&request.password)? {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.jwt_manager.generate_token(&user)?;
        Ok((user, token))
    }

    /// Verify the bearer token on a request into a typed context
    ///
    /// This is the single place the raw token is inspected; handlers only
    /// ever see the resulting [`AuthContext`].
    pub fn authenticate(&self, headers: &HeaderMap) -> AuthResult<AuthContext> {
        let token = bearer_token(headers)?;
        let claims = self.jwt_manager.validate_token(token)?;
        AuthContext::from_claims(&claims)
    }

    /// Token lifetime in seconds
    pub fn token_ttl_seconds(&self) -> i64 {
        self.jwt_manager.ttl_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::user::{InMemoryUserRepository, Role};

    fn test_service() -> AuthService<InMemoryUserRepository> {
        AuthService::new(
            InMemoryUserRepository::new(),
            JwtConfig {
                secret: "test_secret_key_for_testing_only".to_string(),
                ..JwtConfig::default()
            },
            PasswordPolicy::default(),
        )
    }

    fn register_request(role: Role) -> RegisterRequest {
        RegisterRequest {
            name: "Admin".to_string(),
            email: "admin@example.edu".to_string(),
            password: "password123".to_string(),
            role,
        }
    }

    #[test]
    fn test_register_then_login() {
        let service = test_service();
        let (user, token) = service.register(register_request(Role::Admin)).unwrap();
        assert!(!token.is_empty());
        assert_eq!(user.role, Role::Admin);

        let (logged_in, _) = service
            .login(LoginRequest {
                email: "admin@example.edu".to_string(),
                password: "password123".to_string(),
            })
            .unwrap();
        assert_eq!(logged_in.id, user.id);
    }

    #[test]
    fn test_login_wrong_password_rejected() {
        let service = test_service();
        service.register(register_request(Role::Admin)).unwrap();

        let result = service.login(LoginRequest {
            email: "admin@example.edu".to_string(),
            password: "wrong password".to_string(),
        });
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[test]
    fn test_login_unknown_email_rejected() {
        let service = test_service();
        let result = service.login(LoginRequest {
            email: "nobody@example.edu".to_string(),
            password: "password123".to_string(),
        });
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let service = test_service();
        service.register(register_request(Role::Admin)).unwrap();
        let result = service.register(register_request(Role::Teacher));
        assert!(matches!(result, Err(AuthError::EmailAlreadyExists)));
    }

    #[test]
    fn test_authenticate_round_trip() {
        let service = test_service();
        let (user, token) = service.register(register_request(Role::Teacher)).unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            "authorization",
            format!("Bearer {token}").parse().unwrap(),
        );

        let ctx = service.authenticate(&headers).unwrap();
        assert_eq!(ctx.user_id, user.id);
        assert_eq!(ctx.role, Role::Teacher);
    }

    #[test]
    fn test_authenticate_missing_header() {
        let service = test_service();
        let result = service.authenticate(&HeaderMap::new());
        assert!(matches!(result, Err(AuthError::MissingToken)));
    }
}
