//! Student HTTP Routes
//!
//! Student record CRUD; mutations are admin-only.

use std::sync::Arc;

use axum::{
    extract::{Json, Path, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, post, put},
    Router,
};
use uuid::Uuid;

use crate::registry::student::{
    InMemoryStudentRegistry, NewStudent, Student, StudentRegistry, StudentUpdate,
};
use crate::registry::RegistryError;

use super::{registry_error, require_admin, ApiError, Auth, MessageResponse};

/// Shared student route state
pub struct StudentState {
    pub students: Arc<InMemoryStudentRegistry>,
    pub auth: Arc<Auth>,
}

/// Student routes with shared state
pub fn student_routes(state: Arc<StudentState>) -> Router {
    Router::new()
        .route("/", get(list_students_handler))
        .route("/", post(create_student_handler))
        .route("/:id", put(update_student_handler))
        .route("/:id", delete(delete_student_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_students_handler(
    State(state): State<Arc<StudentState>>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let students = state.students.list().map_err(registry_error)?;
    Ok(Json(students))
}

async fn create_student_handler(
    State(state): State<Arc<StudentState>>,
    headers: HeaderMap,
    Json(request): Json<NewStudent>,
) -> Result<(StatusCode, Json<Student>), ApiError> {
    require_admin(&state.auth, &headers)?;

    let student = Student::new(request).map_err(registry_error)?;
    state.students.create(&student).map_err(registry_error)?;
    Ok((StatusCode::CREATED, Json(student)))
}

async fn update_student_handler(
    State(state): State<Arc<StudentState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(update): Json<StudentUpdate>,
) -> Result<Json<Student>, ApiError> {
    require_admin(&state.auth, &headers)?;

    let mut student = state
        .students
        .find_by_id(id)
        .map_err(registry_error)?
        .ok_or_else(|| registry_error(RegistryError::NotFound("Student")))?;

    student.apply(update);
    state.students.update(&student).map_err(registry_error)?;
    Ok(Json(student))
}

async fn delete_student_handler(
    State(state): State<Arc<StudentState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    require_admin(&state.auth, &headers)?;

    state.students.delete(id).map_err(registry_error)?;
    Ok(Json(MessageResponse {
        message: "Student deleted successfully".to_string(),
    }))
}
