//! Auth HTTP Routes
//!
//! Registration and login. Both return a bearer token plus the public
//! user profile.

use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::post,
    Router,
};
use serde::Serialize;

use crate::auth::user::{LoginRequest, RegisterRequest, Role, User};

use super::{auth_error, ApiError, Auth};

/// Shared auth route state
pub struct AuthRouteState {
    pub service: Arc<Auth>,
}

/// Auth routes with shared state
pub fn auth_routes(state: Arc<AuthRouteState>) -> Router {
    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
        .with_state(state)
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
    pub expires_in: i64,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

// ==================
// Handlers
// ==================

async fn register_handler(
    State(state): State<Arc<AuthRouteState>>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let (user, token) = state.service.register(request).map_err(auth_error)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: UserResponse::from(&user),
            expires_in: state.service.token_ttl_seconds(),
        }),
    ))
}

async fn login_handler(
    State(state): State<Arc<AuthRouteState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let (user, token) = state.service.login(request).map_err(auth_error)?;

    Ok(Json(AuthResponse {
        token,
        user: UserResponse::from(&user),
        expires_in: state.service.token_ttl_seconds(),
    }))
}
