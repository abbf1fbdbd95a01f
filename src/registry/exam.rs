//! # Exam Registry
//!
//! Exam records and their many-to-many association to rooms.
//! The exam owns its room list; rooms are embedded copies taken at
//! scheduling time and replaced wholesale on update.

use std::sync::RwLock;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::{RegistryError, RegistryResult};
use super::room::Room;

/// A scheduled exam
///
/// No two exams sharing a room are checked for overlapping time windows.
/// The check is deliberately absent pending product confirmation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    pub id: Uuid,
    pub course_name: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// Rooms this exam is booked into (non-empty on creation)
    pub rooms: Vec<Room>,
}

/// Exam registry trait
///
/// Abstracts storage operations for exams. Listing order is insertion
/// order; the registry never sorts by time.
pub trait ExamRegistry: Send + Sync {
    /// List all exams in insertion order
    fn list(&self) -> RegistryResult<Vec<Exam>>;

    /// Find an exam by its ID
    fn find_by_id(&self, id: Uuid) -> RegistryResult<Option<Exam>>;

    /// Find all exams booked into the given room, in insertion order
    ///
    /// An unknown room simply matches no exams; there is no distinct
    /// not-found signal here.
    fn find_by_room(&self, room_id: Uuid) -> RegistryResult<Vec<Exam>>;

    /// Create a new exam
    fn create(&self, exam: &Exam) -> RegistryResult<()>;

    /// Update an existing exam
    fn update(&self, exam: &Exam) -> RegistryResult<()>;

    /// Delete an exam
    fn delete(&self, id: Uuid) -> RegistryResult<()>;
}

/// In-memory exam registry
#[derive(Debug, Default)]
pub struct InMemoryExamRegistry {
    exams: RwLock<Vec<Exam>>,
}

impl InMemoryExamRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExamRegistry for InMemoryExamRegistry {
    fn list(&self) -> RegistryResult<Vec<Exam>> {
        let exams = self
            .exams
            .read()
            .map_err(|_| RegistryError::Store("Lock poisoned".to_string()))?;
        Ok(exams.clone())
    }

    fn find_by_id(&self, id: Uuid) -> RegistryResult<Option<Exam>> {
        let exams = self
            .exams
            .read()
            .map_err(|_| RegistryError::Store("Lock poisoned".to_string()))?;
        Ok(exams.iter().find(|e| e.id == id).cloned())
    }

    fn find_by_room(&self, room_id: Uuid) -> RegistryResult<Vec<Exam>> {
        let exams = self
            .exams
            .read()
            .map_err(|_| RegistryError::Store("Lock poisoned".to_string()))?;
        Ok(exams
            .iter()
            .filter(|e| e.rooms.iter().any(|r| r.id == room_id))
            .cloned()
            .collect())
    }

    fn create(&self, exam: &Exam) -> RegistryResult<()> {
        let mut exams = self
            .exams
            .write()
            .map_err(|_| RegistryError::Store("Lock poisoned".to_string()))?;
        exams.push(exam.clone());
        Ok(())
    }

    fn update(&self, exam: &Exam) -> RegistryResult<()> {
        let mut exams = self
            .exams
            .write()
            .map_err(|_| RegistryError::Store("Lock poisoned".to_string()))?;

        if let Some(existing) = exams.iter_mut().find(|e| e.id == exam.id) {
            *existing = exam.clone();
            Ok(())
        } else {
            Err(RegistryError::NotFound("Exam"))
        }
    }

    fn delete(&self, id: Uuid) -> RegistryResult<()> {
        let mut exams = self
            .exams
            .write()
            .map_err(|_| RegistryError::Store("Lock poisoned".to_string()))?;

        let len_before = exams.len();
        exams.retain(|e| e.id != id);

        if exams.len() == len_before {
            Err(RegistryError::NotFound("Exam"))
        } else {
            Ok(())
        }
    }
}
