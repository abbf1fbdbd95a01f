//! Exam HTTP Routes
//!
//! Exam scheduling and CRUD. Role enforcement is deliberately absent on
//! these endpoints; see DESIGN.md.

use std::sync::Arc;

use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Router,
};
use uuid::Uuid;

use crate::registry::exam::Exam;
use crate::scheduling::{ExamUpdate, ScheduleExamRequest};

use super::{registry_error, ApiError, MessageResponse, Scheduler};

/// Shared exam route state
pub struct ExamState {
    pub scheduler: Arc<Scheduler>,
}

/// Exam routes with shared state
pub fn exam_routes(state: Arc<ExamState>) -> Router {
    Router::new()
        .route("/", post(schedule_exam_handler))
        .route("/", get(list_exams_handler))
        .route("/:id", get(get_exam_handler))
        .route("/:id", put(update_exam_handler))
        .route("/:id", delete(delete_exam_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn schedule_exam_handler(
    State(state): State<Arc<ExamState>>,
    Json(request): Json<ScheduleExamRequest>,
) -> Result<(StatusCode, Json<Exam>), ApiError> {
    let exam = state.scheduler.schedule(request).map_err(registry_error)?;
    Ok((StatusCode::CREATED, Json(exam)))
}

async fn list_exams_handler(
    State(state): State<Arc<ExamState>>,
) -> Result<Json<Vec<Exam>>, ApiError> {
    let exams = state.scheduler.list().map_err(registry_error)?;
    Ok(Json(exams))
}

async fn get_exam_handler(
    State(state): State<Arc<ExamState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Exam>, ApiError> {
    let exam = state.scheduler.get(id).map_err(registry_error)?;
    Ok(Json(exam))
}

async fn update_exam_handler(
    State(state): State<Arc<ExamState>>,
    Path(id): Path<Uuid>,
    Json(update): Json<ExamUpdate>,
) -> Result<Json<Exam>, ApiError> {
    let exam = state.scheduler.update(id, update).map_err(registry_error)?;
    Ok(Json(exam))
}

async fn delete_exam_handler(
    State(state): State<Arc<ExamState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.scheduler.delete(id).map_err(registry_error)?;
    Ok(Json(MessageResponse {
        message: "Exam deleted successfully".to_string(),
    }))
}
