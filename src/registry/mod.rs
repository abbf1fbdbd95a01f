//! Domain registries for the college-management backend
//!
//! Each registry is a storage trait with an in-memory implementation.
//! Durability and isolation are delegated entirely to the backing store;
//! the registries add no cross-record transactions.

pub mod errors;
pub mod exam;
pub mod room;
pub mod student;
pub mod teacher;

pub use errors::{RegistryError, RegistryResult};
pub use exam::{Exam, ExamRegistry, InMemoryExamRegistry};
pub use room::{InMemoryRoomRegistry, NewRoom, Room, RoomRegistry, RoomStatus, RoomUpdate};
pub use student::{InMemoryStudentRegistry, NewStudent, Student, StudentRegistry, StudentUpdate};
pub use teacher::{InMemoryTeacherRegistry, NewTeacher, Teacher, TeacherRegistry, TeacherUpdate};
