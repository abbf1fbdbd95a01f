//! Teacher HTTP Routes
//!
//! Teacher record CRUD; mutations are admin-only.

use std::sync::Arc;

use axum::{
    extract::{Json, Path, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, post, put},
    Router,
};
use uuid::Uuid;

use crate::registry::teacher::{
    InMemoryTeacherRegistry, NewTeacher, Teacher, TeacherRegistry, TeacherUpdate,
};
use crate::registry::RegistryError;

use super::{registry_error, require_admin, ApiError, Auth, MessageResponse};

/// Shared teacher route state
pub struct TeacherState {
    pub teachers: Arc<InMemoryTeacherRegistry>,
    pub auth: Arc<Auth>,
}

/// Teacher routes with shared state
pub fn teacher_routes(state: Arc<TeacherState>) -> Router {
    Router::new()
        .route("/", get(list_teachers_handler))
        .route("/", post(create_teacher_handler))
        .route("/:id", put(update_teacher_handler))
        .route("/:id", delete(delete_teacher_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_teachers_handler(
    State(state): State<Arc<TeacherState>>,
) -> Result<Json<Vec<Teacher>>, ApiError> {
    let teachers = state.teachers.list().map_err(registry_error)?;
    Ok(Json(teachers))
}

async fn create_teacher_handler(
    State(state): State<Arc<TeacherState>>,
    headers: HeaderMap,
    Json(request): Json<NewTeacher>,
) -> Result<(StatusCode, Json<Teacher>), ApiError> {
    require_admin(&state.auth, &headers)?;

    let teacher = Teacher::new(request).map_err(registry_error)?;
    state.teachers.create(&teacher).map_err(registry_error)?;
    Ok((StatusCode::CREATED, Json(teacher)))
}

async fn update_teacher_handler(
    State(state): State<Arc<TeacherState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(update): Json<TeacherUpdate>,
) -> Result<Json<Teacher>, ApiError> {
    require_admin(&state.auth, &headers)?;

    let mut teacher = state
        .teachers
        .find_by_id(id)
        .map_err(registry_error)?
        .ok_or_else(|| registry_error(RegistryError::NotFound("Teacher")))?;

    teacher.apply(update);
    state.teachers.update(&teacher).map_err(registry_error)?;
    Ok(Json(teacher))
}

async fn delete_teacher_handler(
    State(state): State<Arc<TeacherState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    require_admin(&state.auth, &headers)?;

    state.teachers.delete(id).map_err(registry_error)?;
    Ok(Json(MessageResponse {
        message: "Teacher deleted successfully".to_string(),
    }))
}
