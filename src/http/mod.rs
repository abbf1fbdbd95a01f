//! HTTP API
//!
//! Axum routers per resource, combined by [`server::HttpServer`].
//! All error bodies share the fixed `{error, code}` shape.

pub mod auth_routes;
pub mod exam_routes;
pub mod room_routes;
pub mod server;
pub mod student_routes;
pub mod teacher_routes;

use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::Serialize;

use crate::auth::context::AuthContext;
use crate::auth::errors::AuthError;
use crate::auth::service::AuthService;
use crate::auth::user::InMemoryUserRepository;
use crate::observability::Logger;
use crate::registry::errors::RegistryError;
use crate::registry::exam::InMemoryExamRegistry;
use crate::registry::room::InMemoryRoomRegistry;
use crate::scheduling::SchedulingService;

pub use server::HttpServer;

/// Concrete auth service used by the HTTP layer
pub type Auth = AuthService<InMemoryUserRepository>;

/// Concrete scheduling service used by the HTTP layer
pub type Scheduler = SchedulingService<InMemoryRoomRegistry, InMemoryExamRegistry>;

/// Fixed-shape error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

/// Fixed-shape success message body
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error half of every handler's return type
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Convert a registry error to its wire representation
pub(crate) fn registry_error(err: RegistryError) -> ApiError {
    if !err.is_client_error() {
        Logger::error("registry_failure", &[("detail", &format!("{err:?}"))]);
    }
    let code = err.status_code();
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
            code,
        }),
    )
}

/// Convert an auth error to its wire representation
pub(crate) fn auth_error(err: AuthError) -> ApiError {
    if !err.is_client_error() {
        Logger::error("auth_failure", &[("detail", &format!("{err:?}"))]);
    }
    let code = err.status_code();
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
            code,
        }),
    )
}

/// Verify the bearer token and require the admin role
///
/// The token is inspected exactly once here; handlers receive the typed
/// context.
pub(crate) fn require_admin(auth: &Auth, headers: &HeaderMap) -> Result<AuthContext, ApiError> {
    let ctx = auth.authenticate(headers).map_err(auth_error)?;
    ctx.require_admin().map_err(auth_error)?;
    Ok(ctx)
}
