//! # Teacher Registry
//!
//! Teaching staff records. Create and update requests carry `subjects` as
//! a comma-separated string which is split and trimmed before storage.

use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::{RegistryError, RegistryResult};

/// A teacher record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: Uuid,
    pub name: String,
    /// Unique
    pub email: String,
    pub department: String,
    pub subjects: Vec<String>,
    pub join_date: DateTime<Utc>,
}

/// Teacher creation request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTeacher {
    pub name: String,
    pub email: String,
    pub department: String,
    /// Comma-separated, e.g. "Physics, Applied Maths"
    pub subjects: String,
}

/// Partial teacher update; absent fields keep their current value
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    /// Comma-separated; replaces the whole subject list when present
    pub subjects: Option<String>,
}

fn split_subjects(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl Teacher {
    /// Create a new teacher from a creation request
    pub fn new(request: NewTeacher) -> RegistryResult<Self> {
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
            department: request.department,
            subjects: split_subjects(&request.subjects),
            join_date: Utc::now(),
        })
    }

    /// Merge the provided fields into this teacher
    pub fn apply(&mut self, update: TeacherUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(department) = update.department {
            self.department = department;
        }
        if let Some(subjects) = update.subjects {
            self.subjects = split_subjects(&subjects);
        }
    }
}

/// Teacher registry trait
pub trait TeacherRegistry: Send + Sync {
    /// List all teachers in insertion order
    fn list(&self) -> RegistryResult<Vec<Teacher>>;

    /// Find a teacher by their ID
    fn find_by_id(&self, id: Uuid) -> RegistryResult<Option<Teacher>>;

    /// Create a new teacher
    fn create(&self, teacher: &Teacher) -> RegistryResult<()>;

    /// Update an existing teacher
    fn update(&self, teacher: &Teacher) -> RegistryResult<()>;

    /// Delete a teacher
    fn delete(&self, id: Uuid) -> RegistryResult<()>;
}

/// In-memory teacher registry
#[derive(Debug, Default)]
pub struct InMemoryTeacherRegistry {
    teachers: RwLock<Vec<Teacher>>,
}

impl InMemoryTeacherRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TeacherRegistry for InMemoryTeacherRegistry {
    fn list(&self) -> RegistryResult<Vec<Teacher>> {
        let teachers = self
            .teachers
            .read()
            .map_err(|_| RegistryError::Store("Lock poisoned".to_string()))?;
        Ok(teachers.clone())
    }

    fn find_by_id(&self, id: Uuid) -> RegistryResult<Option<Teacher>> {
        let teachers = self
            .teachers
            .read()
            .map_err(|_| RegistryError::Store("Lock poisoned".to_string()))?;
        Ok(teachers.iter().find(|t| t.id == id).cloned())
    }

    fn create(&self, teacher: &Teacher) -> RegistryResult<()> {
        let mut teachers = self
            .teachers
            .write()
            .map_err(|_| RegistryError::Store("Lock poisoned".to_string()))?;

        if teachers.iter().any(|t| t.email == teacher.email) {
            return Err(RegistryError::Conflict(
                "Email already registered".to_string(),
            ));
        }

        teachers.push(teacher.clone());
        Ok(())
    }

    fn update(&self, teacher: &Teacher) -> RegistryResult<()> {
        let mut teachers = self
            .teachers
            .write()
            .map_err(|_| RegistryError::Store("Lock poisoned".to_string()))?;

        if teachers
            .iter()
            .any(|t| t.id != teacher.id && t.email == teacher.email)
        {
            return Err(RegistryError::Conflict(
                "Email already registered".to_string(),
            ));
        }

        if let Some(existing) = teachers.iter_mut().find(|t| t.id == teacher.id) {
            *existing = teacher.clone();
            Ok(())
        } else {
            Err(RegistryError::NotFound("Teacher"))
        }
    }

    fn delete(&self, id: Uuid) -> RegistryResult<()> {
        let mut teachers = self
            .teachers
            .write()
            .map_err(|_| RegistryError::Store("Lock poisoned".to_string()))?;

        let len_before = teachers.len();
        teachers.retain(|t| t.id != id);

        if teachers.len() == len_before {
            Err(RegistryError::NotFound("Teacher"))
        } else {
            Ok(())
        }
    }
}
