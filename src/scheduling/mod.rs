//! # Exam Scheduling
//!
//! The scheduling operation, the per-room availability query, and exam
//! retrieval/update/delete, composed over the room and exam registries.
//!
//! Room resolution and the exam insert are two separate registry calls
//! with no transaction spanning them; a room deleted in between is not
//! re-checked. Isolation is whatever the backing store provides.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::registry::errors::{RegistryError, RegistryResult};
use crate::registry::exam::{Exam, ExamRegistry};
use crate::registry::room::RoomRegistry;

/// Request to schedule a new exam
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleExamRequest {
    pub course_name: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub room_ids: Vec<Uuid>,
}

/// Partial exam update
///
/// Scalar fields merge; `room_ids`, when present, fully replaces the
/// prior room set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamUpdate {
    pub course_name: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub room_ids: Option<Vec<Uuid>>,
}

/// One row of a room's schedule, projected from an exam
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub id: Uuid,
    pub course: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl From<&Exam> for ScheduleEntry {
    fn from(exam: &Exam) -> Self {
        Self {
            id: exam.id,
            course: exam.course_name.clone(),
            date: exam.date,
            start_time: exam.start_time,
            end_time: exam.end_time,
        }
    }
}

/// Scheduling service over the room and exam registries
pub struct SchedulingService<R: RoomRegistry, E: ExamRegistry> {
    rooms: Arc<R>,
    exams: Arc<E>,
}

impl<R: RoomRegistry, E: ExamRegistry> SchedulingService<R, E> {
    pub fn new(rooms: Arc<R>, exams: Arc<E>) -> Self {
        Self { rooms, exams }
    }

    /// Schedule a new exam against the selected rooms
    ///
    /// Room IDs are resolved against the room registry; a partially
    /// invalid list is narrowed to the valid subset, and only an entirely
    /// invalid list is rejected. Booked rooms keep their status; no
    /// overlap check is performed against exams already in those rooms.
    pub fn schedule(&self, request: ScheduleExamRequest) -> RegistryResult<Exam> {
        if request.course_name.trim().is_empty() {
            return Err(RegistryError::Validation(
                "Course name must not be empty".to_string(),
            ));
        }
        if request.room_ids.is_empty() {
            return Err(RegistryError::Validation(
                "No valid rooms selected".to_string(),
            ));
        }
        if request.start_time >= request.end_time {
            return Err(RegistryError::Validation(
                "Start time must be before end time".to_string(),
            ));
        }

        let rooms = self.rooms.find_by_ids(&request.room_ids)?;
        if rooms.is_empty() {
            return Err(RegistryError::Validation(
                "No valid rooms selected".to_string(),
            ));
        }

        let exam = Exam {
            id: Uuid::new_v4(),
            course_name: request.course_name,
            date: request.date,
            start_time: request.start_time,
            end_time: request.end_time,
            rooms,
        };
        self.exams.create(&exam)?;
        Ok(exam)
    }

    /// List all exams with their rooms
    pub fn list(&self) -> RegistryResult<Vec<Exam>> {
        self.exams.list()
    }

    /// Look up an exam by ID
    pub fn get(&self, id: Uuid) -> RegistryResult<Exam> {
        self.exams
            .find_by_id(id)?
            .ok_or(RegistryError::NotFound("Exam"))
    }

    /// Update an exam
    ///
    /// Scalar fields merge into the stored exam. When `room_ids` is
    /// present the room set is fully reassigned, not merged; an entirely
    /// invalid replacement list is rejected so an exam never ends up
    /// with no rooms.
    pub fn update(&self, id: Uuid, update: ExamUpdate) -> RegistryResult<Exam> {
        let mut exam = self.get(id)?;

        if let Some(room_ids) = update.room_ids {
            let rooms = self.rooms.find_by_ids(&room_ids)?;
            if rooms.is_empty() {
                return Err(RegistryError::Validation(
                    "No valid rooms selected".to_string(),
                ));
            }
            exam.rooms = rooms;
        }

        if let Some(course_name) = update.course_name {
            if course_name.trim().is_empty() {
                return Err(RegistryError::Validation(
                    "Course name must not be empty".to_string(),
                ));
            }
            exam.course_name = course_name;
        }
        if let Some(date) = update.date {
            exam.date = date;
        }
        if let Some(start_time) = update.start_time {
            exam.start_time = start_time;
        }
        if let Some(end_time) = update.end_time {
            exam.end_time = end_time;
        }
        if exam.start_time >= exam.end_time {
            return Err(RegistryError::Validation(
                "Start time must be before end time".to_string(),
            ));
        }

        self.exams.update(&exam)?;
        Ok(exam)
    }

    /// Delete an exam
    pub fn delete(&self, id: Uuid) -> RegistryResult<()> {
        self.exams.delete(id)
    }

    /// Derive a room's schedule
    ///
    /// Returns one entry per exam booked into the room, in registry
    /// insertion order. A room with no exams, or an unknown room, yields
    /// an empty list rather than an error.
    pub fn room_schedule(&self, room_id: Uuid) -> RegistryResult<Vec<ScheduleEntry>> {
        let exams = self.exams.find_by_room(room_id)?;
        Ok(exams.iter().map(ScheduleEntry::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::exam::InMemoryExamRegistry;
    use crate::registry::room::{InMemoryRoomRegistry, NewRoom, Room, RoomStatus};

    fn test_service() -> (
        Arc<InMemoryRoomRegistry>,
        SchedulingService<InMemoryRoomRegistry, InMemoryExamRegistry>,
    ) {
        let rooms = Arc::new(InMemoryRoomRegistry::new());
        let exams = Arc::new(InMemoryExamRegistry::new());
        let service = SchedulingService::new(rooms.clone(), exams);
        (rooms, service)
    }

    fn add_room(rooms: &InMemoryRoomRegistry, number: &str) -> Room {
        let room = Room::new(NewRoom {
            room_number: number.to_string(),
            capacity: 30,
            floor: "1".to_string(),
            building: "Main".to_string(),
            status: RoomStatus::Available,
        })
        .unwrap();
        rooms.create(&room).unwrap();
        room
    }

    fn request(course: &str, room_ids: Vec<Uuid>) -> ScheduleExamRequest {
        ScheduleExamRequest {
            course_name: course.to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
            room_ids,
        }
    }

    #[test]
    fn test_schedule_with_valid_room() {
        let (rooms, service) = test_service();
        let room = add_room(&rooms, "A-101");

        let exam = service.schedule(request("Physics", vec![room.id])).unwrap();
        assert_eq!(exam.rooms.len(), 1);
        assert_eq!(exam.rooms[0].id, room.id);
    }

    #[test]
    fn test_schedule_narrows_to_valid_subset() {
        let (rooms, service) = test_service();
        let room = add_room(&rooms, "A-101");

        let exam = service
            .schedule(request("Physics", vec![Uuid::new_v4(), room.id]))
            .unwrap();
        let ids: Vec<Uuid> = exam.rooms.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![room.id]);
    }

    #[test]
    fn test_schedule_all_invalid_rooms_rejected() {
        let (_rooms, service) = test_service();

        let result = service.schedule(request("Physics", vec![Uuid::new_v4()]));
        assert!(matches!(result, Err(RegistryError::Validation(_))));
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_schedule_empty_course_name_rejected() {
        let (rooms, service) = test_service();
        let room = add_room(&rooms, "A-101");

        let result = service.schedule(request("  ", vec![room.id]));
        assert!(matches!(result, Err(RegistryError::Validation(_))));
    }

    #[test]
    fn test_schedule_inverted_times_rejected() {
        let (rooms, service) = test_service();
        let room = add_room(&rooms, "A-101");

        let mut req = request("Physics", vec![room.id]);
        req.start_time = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        req.end_time = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        assert!(matches!(
            service.schedule(req),
            Err(RegistryError::Validation(_))
        ));
    }

    #[test]
    fn test_update_replaces_room_set() {
        let (rooms, service) = test_service();
        let a = add_room(&rooms, "A-101");
        let b = add_room(&rooms, "B-102");
        let c = add_room(&rooms, "C-103");

        let exam = service
            .schedule(request("Physics", vec![a.id, b.id]))
            .unwrap();

        let updated = service
            .update(
                exam.id,
                ExamUpdate {
                    room_ids: Some(vec![c.id]),
                    ..Default::default()
                },
            )
            .unwrap();

        let ids: Vec<Uuid> = updated.rooms.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![c.id]);
    }

    #[test]
    fn test_update_merges_scalar_fields() {
        let (rooms, service) = test_service();
        let room = add_room(&rooms, "A-101");
        let exam = service.schedule(request("Physics", vec![room.id])).unwrap();

        let updated = service
            .update(
                exam.id,
                ExamUpdate {
                    course_name: Some("Physics II".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.course_name, "Physics II");
        assert_eq!(updated.date, exam.date);
        assert_eq!(updated.rooms.len(), 1);
    }

    #[test]
    fn test_update_with_all_invalid_rooms_rejected() {
        let (rooms, service) = test_service();
        let room = add_room(&rooms, "A-101");
        let exam = service.schedule(request("Physics", vec![room.id])).unwrap();

        let result = service.update(
            exam.id,
            ExamUpdate {
                room_ids: Some(vec![Uuid::new_v4()]),
                ..Default::default()
            },
        );
        assert!(matches!(result, Err(RegistryError::Validation(_))));

        // Prior room set untouched
        assert_eq!(service.get(exam.id).unwrap().rooms[0].id, room.id);
    }

    #[test]
    fn test_update_unknown_exam() {
        let (_rooms, service) = test_service();
        let result = service.update(Uuid::new_v4(), ExamUpdate::default());
        assert!(matches!(result, Err(RegistryError::NotFound("Exam"))));
    }

    #[test]
    fn test_room_schedule_projection() {
        let (rooms, service) = test_service();
        let room = add_room(&rooms, "A-101");
        let exam = service.schedule(request("Physics", vec![room.id])).unwrap();

        let schedule = service.room_schedule(room.id).unwrap();
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule[0].id, exam.id);
        assert_eq!(schedule[0].course, "Physics");
        assert_eq!(schedule[0].date, exam.date);
        assert_eq!(schedule[0].start_time, exam.start_time);
        assert_eq!(schedule[0].end_time, exam.end_time);
    }

    #[test]
    fn test_room_schedule_unknown_room_is_empty() {
        let (_rooms, service) = test_service();
        assert!(service.room_schedule(Uuid::new_v4()).unwrap().is_empty());
    }

    #[test]
    fn test_delete_unknown_exam_leaves_registry_unchanged() {
        let (rooms, service) = test_service();
        let room = add_room(&rooms, "A-101");
        service.schedule(request("Physics", vec![room.id])).unwrap();

        let result = service.delete(Uuid::new_v4());
        assert!(matches!(result, Err(RegistryError::NotFound("Exam"))));
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_overlapping_exams_in_same_room_are_allowed() {
        // Conflict rejection is an open product question; the current
        // behavior is to accept overlapping bookings.
        let (rooms, service) = test_service();
        let room = add_room(&rooms, "A-101");

        service.schedule(request("Physics", vec![room.id])).unwrap();
        service.schedule(request("Chemistry", vec![room.id])).unwrap();

        assert_eq!(service.room_schedule(room.id).unwrap().len(), 2);
    }
}
