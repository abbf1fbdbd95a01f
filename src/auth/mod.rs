//! Authentication and authorization
//!
//! Argon2id password hashing, HS256 JWTs, and typed request contexts.
//! Tokens carry only the user ID and role.

pub mod context;
pub mod crypto;
pub mod errors;
pub mod jwt;
pub mod service;
pub mod user;

pub use context::{bearer_token, AuthContext};
pub use crypto::PasswordPolicy;
pub use errors::{AuthError, AuthResult};
pub use jwt::{JwtClaims, JwtConfig, JwtManager};
pub use service::AuthService;
pub use user::{InMemoryUserRepository, LoginRequest, RegisterRequest, Role, User, UserRepository};
