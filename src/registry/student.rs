//! # Student Registry
//!
//! Student records: enrollment details, attendance, and per-subject
//! performance data.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::{RegistryError, RegistryResult};

/// A per-subject score entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub subject: String,
    pub score: f64,
}

/// A student record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    /// Unique
    pub email: String,
    #[serde(rename = "class")]
    pub class_name: String,
    /// Unique
    pub roll_number: String,
    /// Attendance percentage
    pub attendance: f64,
    pub performance_data: Vec<PerformanceRecord>,
}

/// Student creation request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub roll_number: String,
    #[serde(default)]
    pub attendance: f64,
    #[serde(default)]
    pub performance_data: Vec<PerformanceRecord>,
}

/// Partial student update; absent fields keep their current value
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "class")]
    pub class_name: Option<String>,
    pub roll_number: Option<String>,
    pub attendance: Option<f64>,
    pub performance_data: Option<Vec<PerformanceRecord>>,
}

impl Student {
    /// Create a new student from a creation request
    pub fn new(request: NewStudent) -> RegistryResult<Self> {
        if request.name.trim().is_empty() {
            return Err(RegistryError::Validation(
                "Name must not be empty".to_string(),
            ));
        }
        if request.email.trim().is_empty() {
            return Err(RegistryError::Validation(
                "Email must not be empty".to_string(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: request.name,
            email: request.email,
            class_name: request.class_name,
            roll_number: request.roll_number,
            attendance: request.attendance,
            performance_data: request.performance_data,
        })
    }

    /// Merge the provided fields into this student
    pub fn apply(&mut self, update: StudentUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(class_name) = update.class_name {
            self.class_name = class_name;
        }
        if let Some(roll_number) = update.roll_number {
            self.roll_number = roll_number;
        }
        if let Some(attendance) = update.attendance {
            self.attendance = attendance;
        }
        if let Some(performance_data) = update.performance_data {
            self.performance_data = performance_data;
        }
    }
}

/// Student registry trait
pub trait StudentRegistry: Send + Sync {
    /// List all students in insertion order
    fn list(&self) -> RegistryResult<Vec<Student>>;

    /// Find a student by their ID
    fn find_by_id(&self, id: Uuid) -> RegistryResult<Option<Student>>;

    /// Create a new student
    fn create(&self, student: &Student) -> RegistryResult<()>;

    /// Update an existing student
    fn update(&self, student: &Student) -> RegistryResult<()>;

    /// Delete a student
    fn delete(&self, id: Uuid) -> RegistryResult<()>;
}

/// In-memory student registry
#[derive(Debug, Default)]
pub struct InMemoryStudentRegistry {
    students: RwLock<Vec<Student>>,
}

impl InMemoryStudentRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StudentRegistry for InMemoryStudentRegistry {
    fn list(&self) -> RegistryResult<Vec<Student>> {
        let students = self
            .students
            .read()
            .map_err(|_| RegistryError::Store("Lock poisoned".to_string()))?;
        Ok(students.clone())
    }

    fn find_by_id(&self, id: Uuid) -> RegistryResult<Option<Student>> {
        let students = self
            .students
            .read()
            .map_err(|_| RegistryError::Store("Lock poisoned".to_string()))?;
        Ok(students.iter().find(|s| s.id == id).cloned())
    }

    fn create(&self, student: &Student) -> RegistryResult<()> {
        let mut students = self
            .students
            .write()
            .map_err(|_| RegistryError::Store("Lock poisoned".to_string()))?;

        if students.iter().any(|s| s.email == student.email) {
            return Err(RegistryError::Conflict(
                "Email already registered".to_string(),
            ));
        }
        if students.iter().any(|s| s.roll_number == student.roll_number) {
            return Err(RegistryError::Conflict(
                "Roll number already registered".to_string(),
            ));
        }

        students.push(student.clone());
        Ok(())
    }

    fn update(&self, student: &Student) -> RegistryResult<()> {
        let mut students = self
            .students
            .write()
            .map_err(|_| RegistryError::Store("Lock poisoned".to_string()))?;

        if students
            .iter()
            .any(|s| s.id != student.id && s.email == student.email)
        {
            return Err(RegistryError::Conflict(
                "Email already registered".to_string(),
            ));
        }
        if students
            .iter()
            .any(|s| s.id != student.id && s.roll_number == student.roll_number)
        {
            return Err(RegistryError::Conflict(
                "Roll number already registered".to_string(),
            ));
        }

        if let Some(existing) = students.iter_mut().find(|s| s.id == student.id) {
            *existing = student.clone();
            Ok(())
        } else {
            Err(RegistryError::NotFound("Student"))
        }
    }

    fn delete(&self, id: Uuid) -> RegistryResult<()> {
        let mut students = self
            .students
            .write()
            .map_err(|_| RegistryError::Store("Lock poisoned".to_string()))?;

        let len_before = students.len();
        students.retain(|s| s.id != id);

        if students.len() == len_before {
            Err(RegistryError::NotFound("Student"))
        } else {
            Ok(())
        }
    }
}
