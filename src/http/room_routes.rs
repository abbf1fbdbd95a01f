//! Exam Room HTTP Routes
//!
//! Room CRUD (mutations are admin-only) and the per-room availability
//! query.

use std::sync::Arc;

use axum::{
    extract::{Json, Path, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, post, put},
    Router,
};
use serde::Serialize;
use uuid::Uuid;

use crate::registry::room::{InMemoryRoomRegistry, NewRoom, Room, RoomRegistry, RoomUpdate};
use crate::scheduling::ScheduleEntry;

use super::{registry_error, require_admin, ApiError, Auth, MessageResponse, Scheduler};

/// Shared room route state
pub struct RoomState {
    pub rooms: Arc<InMemoryRoomRegistry>,
    pub scheduler: Arc<Scheduler>,
    pub auth: Arc<Auth>,
}

/// Room routes with shared state
pub fn room_routes(state: Arc<RoomState>) -> Router {
    Router::new()
        .route("/", get(list_rooms_handler))
        .route("/", post(create_room_handler))
        .route("/:id", put(update_room_handler))
        .route("/:id", delete(delete_room_handler))
        .route("/:id/availability", get(room_availability_handler))
        .with_state(state)
}

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub schedule: Vec<ScheduleEntry>,
}

// ==================
// Handlers
// ==================

async fn list_rooms_handler(
    State(state): State<Arc<RoomState>>,
) -> Result<Json<Vec<Room>>, ApiError> {
    let rooms = state.rooms.list().map_err(registry_error)?;
    Ok(Json(rooms))
}

async fn create_room_handler(
    State(state): State<Arc<RoomState>>,
    headers: HeaderMap,
    Json(request): Json<NewRoom>,
) -> Result<(StatusCode, Json<Room>), ApiError> {
    require_admin(&state.auth, &headers)?;

    let room = Room::new(request).map_err(registry_error)?;
    state.rooms.create(&room).map_err(registry_error)?;
    Ok((StatusCode::CREATED, Json(room)))
}

async fn update_room_handler(
    State(state): State<Arc<RoomState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(update): Json<RoomUpdate>,
) -> Result<Json<Room>, ApiError> {
    require_admin(&state.auth, &headers)?;

    let mut room = state
        .rooms
        .find_by_id(id)
        .map_err(registry_error)?
        .ok_or_else(|| registry_error(crate::registry::RegistryError::NotFound("Room")))?;

    room.apply(update).map_err(registry_error)?;
    state.rooms.update(&room).map_err(registry_error)?;
    Ok(Json(room))
}

async fn delete_room_handler(
    State(state): State<Arc<RoomState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    require_admin(&state.auth, &headers)?;

    // No cascade against exams booked into this room; their embedded
    // room copies stay as-is.
    state.rooms.delete(id).map_err(registry_error)?;
    Ok(Json(MessageResponse {
        message: "Room deleted successfully".to_string(),
    }))
}

async fn room_availability_handler(
    State(state): State<Arc<RoomState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<AvailabilityResponse>, ApiError> {
    let schedule = state.scheduler.room_schedule(id).map_err(registry_error)?;
    Ok(Json(AvailabilityResponse { schedule }))
}
