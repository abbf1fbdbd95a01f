//! # Room Registry
//!
//! Exam room records and their storage.
//! Rooms are referenced, never owned, by exams; deleting a room does not
//! touch exams already booked into it.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::{RegistryError, RegistryResult};

/// Operational status of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoomStatus {
    Available,
    Occupied,
    UnderMaintenance,
}

impl Default for RoomStatus {
    fn default() -> Self {
        RoomStatus::Available
    }
}

/// An exam room
///
/// `status` is mutated manually by admin action only. Booking an exam into a
/// room does not transition it away from `available`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: Uuid,
    /// Human-facing room number (unique)
    pub room_number: String,
    pub capacity: u32,
    pub floor: String,
    pub building: String,
    pub status: RoomStatus,
}

/// Room creation request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoom {
    pub room_number: String,
    pub capacity: u32,
    pub floor: String,
    pub building: String,
    #[serde(default)]
    pub status: RoomStatus,
}

/// Partial room update; absent fields keep their current value
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomUpdate {
    pub room_number: Option<String>,
    pub capacity: Option<u32>,
    pub floor: Option<String>,
    pub building: Option<String>,
    pub status: Option<RoomStatus>,
}

impl Room {
    /// Create a new room from a creation request
    pub fn new(request: NewRoom) -> RegistryResult<Self> {
        if request.room_number.trim().is_empty() {
            return Err(RegistryError::Validation(
                "Room number must not be empty".to_string(),
            ));
        }
        if request.capacity == 0 {
            return Err(RegistryError::Validation(
                "Capacity must be a positive integer".to_string(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            room_number: request.room_number,
            capacity: request.capacity,
            floor: request.floor,
            building: request.building,
            status: request.status,
        })
    }

    /// Merge the provided fields into this room
    pub fn apply(&mut self, update: RoomUpdate) -> RegistryResult<()> {
        if let Some(capacity) = update.capacity {
            if capacity == 0 {
                return Err(RegistryError::Validation(
                    "Capacity must be a positive integer".to_string(),
                ));
            }
            self.capacity = capacity;
        }
        if let Some(room_number) = update.room_number {
            if room_number.trim().is_empty() {
                return Err(RegistryError::Validation(
                    "Room number must not be empty".to_string(),
                ));
            }
            self.room_number = room_number;
        }
        if let Some(floor) = update.floor {
            self.floor = floor;
        }
        if let Some(building) = update.building {
            self.building = building;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        Ok(())
    }
}

/// Room registry trait
///
/// Abstracts storage operations for rooms.
pub trait RoomRegistry: Send + Sync {
    /// List all rooms in insertion order
    fn list(&self) -> RegistryResult<Vec<Room>>;

    /// Find a room by its ID
    fn find_by_id(&self, id: Uuid) -> RegistryResult<Option<Room>>;

    /// Resolve a list of IDs to the rooms that exist
    ///
    /// Unknown IDs are dropped, duplicates collapse to one entry, and the
    /// result preserves the order of the input list. An entirely invalid
    /// list resolves to an empty vector, not an error.
    fn find_by_ids(&self, ids: &[Uuid]) -> RegistryResult<Vec<Room>>;

    /// Create a new room
    fn create(&self, room: &Room) -> RegistryResult<()>;

    /// Update an existing room
    fn update(&self, room: &Room) -> RegistryResult<()>;

    /// Delete a room
    fn delete(&self, id: Uuid) -> RegistryResult<()>;
}

/// In-memory room registry
#[derive(Debug, Default)]
pub struct InMemoryRoomRegistry {
    rooms: RwLock<Vec<Room>>,
}

impl InMemoryRoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RoomRegistry for InMemoryRoomRegistry {
    fn list(&self) -> RegistryResult<Vec<Room>> {
        let rooms = self
            .rooms
            .read()
            .map_err(|_| RegistryError::Store("Lock poisoned".to_string()))?;
        Ok(rooms.clone())
    }

    fn find_by_id(&self, id: Uuid) -> RegistryResult<Option<Room>> {
        let rooms = self
            .rooms
            .read()
            .map_err(|_| RegistryError::Store("Lock poisoned".to_string()))?;
        Ok(rooms.iter().find(|r| r.id == id).cloned())
    }

    fn find_by_ids(&self, ids: &[Uuid]) -> RegistryResult<Vec<Room>> {
        let rooms = self
            .rooms
            .read()
            .map_err(|_| RegistryError::Store("Lock poisoned".to_string()))?;

        let mut resolved = Vec::new();
        for id in ids {
            if resolved.iter().any(|r: &Room| r.id == *id) {
                continue;
            }
            if let Some(room) = rooms.iter().find(|r| r.id == *id) {
                resolved.push(room.clone());
            }
        }
        Ok(resolved)
    }

    fn create(&self, room: &Room) -> RegistryResult<()> {
        let mut rooms = self
            .rooms
            .write()
            .map_err(|_| RegistryError::Store("Lock poisoned".to_string()))?;

        if rooms.iter().any(|r| r.room_number == room.room_number) {
            return Err(RegistryError::Conflict(format!(
                "Room number '{}' already exists",
                room.room_number
            )));
        }

        rooms.push(room.clone());
        Ok(())
    }

    fn update(&self, room: &Room) -> RegistryResult<()> {
        let mut rooms = self
            .rooms
            .write()
            .map_err(|_| RegistryError::Store("Lock poisoned".to_string()))?;

        if rooms
            .iter()
            .any(|r| r.id != room.id && r.room_number == room.room_number)
        {
            return Err(RegistryError::Conflict(format!(
                "Room number '{}' already exists",
                room.room_number
            )));
        }

        if let Some(existing) = rooms.iter_mut().find(|r| r.id == room.id) {
            *existing = room.clone();
            Ok(())
        } else {
            Err(RegistryError::NotFound("Room"))
        }
    }

    fn delete(&self, id: Uuid) -> RegistryResult<()> {
        let mut rooms = self
            .rooms
            .write()
            .map_err(|_| RegistryError::Store("Lock poisoned".to_string()))?;

        let len_before = rooms.len();
        rooms.retain(|r| r.id != id);

        if rooms.len() == len_before {
            Err(RegistryError::NotFound("Room"))
        } else {
            Ok(())
        }
    }
}
