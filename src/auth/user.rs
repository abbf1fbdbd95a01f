//! # User Management
//!
//! User accounts and their storage. Every account carries exactly one
//! role which is embedded in issued tokens.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::crypto::{hash_password, verify_password, PasswordPolicy};
use super::errors::{AuthError, AuthResult};

/// Account role, carried in token claims
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Teacher,
    Student,
}

impl Default for Role {
    fn default() -> Self {
        Role::Admin
    }
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Teacher => "teacher",
            Role::Student => "student",
        }
    }
}

/// A user account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// Unique
    pub email: String,
    /// Argon2id hash, never serialized
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
}

impl User {
    /// Create a new user, hashing the password
    pub fn new(
        name: String,
        email: String,
        password: &str,
        role: Role,
        policy: &PasswordPolicy,
    ) -> AuthResult<Self> {
        policy.validate(password)?;
        let password_hash = hash_password(password)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            role,
        })
    }

    /// Verify a password against this user's stored hash
    pub fn verify_password(&self, password: &str) -> AuthResult<bool> {
        verify_password(password, &self.password_hash)
    }
}

/// Registration request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Role,
}

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// User repository trait
///
/// Abstracts storage operations for user accounts.
pub trait UserRepository: Send + Sync {
    /// Find a user by their email
    fn find_by_email(&self, email: &str) -> AuthResult<Option<User>>;

    /// Check if an email is already registered
    fn email_exists(&self, email: &str) -> AuthResult<bool>;

    /// Create a new user
    fn create(&self, user: &User) -> AuthResult<()>;
}

/// In-memory user repository
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn find_by_email(&self, email: &str) -> AuthResult<Option<User>> {
        let users = self
            .users
            .read()
            .map_err(|_| AuthError::Store("Lock poisoned".to_string()))?;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    fn email_exists(&self, email: &str) -> AuthResult<bool> {
        let users = self
            .users
            .read()
            .map_err(|_| AuthError::Store("Lock poisoned".to_string()))?;
        Ok(users.iter().any(|u| u.email == email))
    }

    fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self
            .users
            .write()
            .map_err(|_| AuthError::Store("Lock poisoned".to_string()))?;

        if users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::EmailAlreadyExists);
        }

        users.push(user.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user(email: &str, role: Role) -> User {
        User::new(
            "Test User".to_string(),
            email.to_string(),
            "password123",
            role,
            &PasswordPolicy::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_user_creation_hashes_password() {
        let user = test_user("admin@example.edu", Role::Admin);
        assert_ne!(user.password_hash, "password123");
        assert!(user.verify_password("password123").unwrap());
        assert!(!user.verify_password("wrong").unwrap());
    }

    #[test]
    fn test_weak_password_rejected() {
        let result = User::new(
            "Test User".to_string(),
            "admin@example.edu".to_string(),
            "short",
            Role::Admin,
            &PasswordPolicy::default(),
        );
        assert!(matches!(result, Err(AuthError::WeakPassword(_))));
    }

    #[test]
    fn test_repository_rejects_duplicate_email() {
        let repo = InMemoryUserRepository::new();
        repo.create(&test_user("admin@example.edu", Role::Admin))
            .unwrap();

        let result = repo.create(&test_user("admin@example.edu", Role::Teacher));
        assert!(matches!(result, Err(AuthError::EmailAlreadyExists)));
    }

    #[test]
    fn test_serialization_omits_password_hash() {
        let user = test_user("admin@example.edu", Role::Admin);
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("passwordHash"));
        assert!(!json.contains(&user.password_hash));
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(
            serde_json::to_string(&Role::Student).unwrap(),
            "\"student\""
        );
    }
}
