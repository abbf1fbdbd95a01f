//! # Request Auth Context
//!
//! Typed claims extracted once at the request boundary and passed as
//! explicit context to handlers. Handlers never look at raw token
//! payloads.

use axum::http::HeaderMap;
use uuid::Uuid;

use super::errors::{AuthError, AuthResult};
use super::jwt::JwtClaims;
use super::user::Role;

/// The verified identity behind a request
#[derive(Debug, Clone, Copy)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub role: Role,
}

impl AuthContext {
    /// Build a context from validated claims
    pub fn from_claims(claims: &JwtClaims) -> AuthResult<Self> {
        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::MalformedToken)?;
        Ok(Self {
            user_id,
            role: claims.role,
        })
    }

    /// Require the admin role
    pub fn require_admin(&self) -> AuthResult<()> {
        if self.role == Role::Admin {
            Ok(())
        } else {
            Err(AuthError::AdminRequired)
        }
    }
}

/// Extract the bearer token from request headers
pub fn bearer_token(headers: &HeaderMap) -> AuthResult<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .ok_or(AuthError::MissingToken)
}
