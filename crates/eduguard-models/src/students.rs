//! Student domain models and DTOs.
//!
//! This module contains the student record kept in the roster and the
//! request DTOs used by the add/edit forms.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidateEmail, ValidationError};

use crate::ids::StudentId;

/// A student on the roster.
///
/// `id` is assigned once at creation and never changes. Every other field is
/// replaced wholesale when the record is updated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct Student {
    pub id: StudentId,
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "Grade is required"))]
    pub grade: String,
    /// School-assigned student number, e.g. `STU001`.
    #[validate(length(min = 1, max = 100, message = "Student ID is required"))]
    pub student_id: String,
    #[validate(length(max = 254))]
    pub email: String,
    #[validate(length(max = 20))]
    pub phone_number: String,
    /// Identifier of the monitored device linked to this student, if any.
    #[validate(length(min = 1, max = 64))]
    pub device_id: Option<String>,
    pub is_active: bool,
    pub registration_date: DateTime<Utc>,
}

impl Student {
    /// Build an active student with a fresh id, registered now.
    pub fn new(
        name: impl Into<String>,
        grade: impl Into<String>,
        student_id: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            id: StudentId::new(),
            name: name.into(),
            grade: grade.into(),
            student_id: student_id.into(),
            email: email.into(),
            phone_number: phone_number.into(),
            device_id: None,
            is_active: true,
            registration_date: Utc::now(),
        }
    }

    /// Linked device, builder style.
    pub fn with_device(mut self, device_id: impl Into<String>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }

    /// The "Grade 10 • STU001" line shown under the student's name.
    pub fn subtitle(&self) -> String {
        format!("{} • {}", self.grade, self.student_id)
    }
}

/// DTO for the "Add Student" form.
#[derive(Deserialize, Debug, Clone, Default, Validate)]
pub struct CreateStudentDto {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "Grade is required"))]
    pub grade: String,
    #[validate(length(min = 1, max = 100, message = "Student ID is required"))]
    pub student_id: String,
    #[validate(email(message = "Email is invalid"))]
    pub email: Option<String>,
    #[validate(length(max = 20))]
    pub phone_number: Option<String>,
    #[validate(length(min = 1, max = 64))]
    pub device_id: Option<String>,
}

impl CreateStudentDto {
    /// Turn the form into a record with a store-independent fresh id.
    pub fn into_student(self) -> Student {
        let mut student = Student::new(
            self.name.trim(),
            self.grade.trim(),
            self.student_id.trim(),
            self.email.unwrap_or_default(),
            self.phone_number.unwrap_or_default(),
        );
        student.device_id = self.device_id;
        student
    }
}

/// DTO for the "Edit Student" form.
///
/// All fields are optional; only provided fields change. The result is a full
/// replacement record handed to the roster's update operation.
#[derive(Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdateStudentDto {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100, message = "Grade is required"))]
    pub grade: Option<String>,
    #[validate(length(min = 1, max = 100, message = "Student ID is required"))]
    pub student_id: Option<String>,
    /// An empty email clears the stored one.
    #[validate(custom(function = "email_or_empty"))]
    pub email: Option<String>,
    #[validate(length(max = 20))]
    pub phone_number: Option<String>,
    pub device_id: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl UpdateStudentDto {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.grade.is_none()
            && self.student_id.is_none()
            && self.email.is_none()
            && self.phone_number.is_none()
            && self.device_id.is_none()
            && self.is_active.is_none()
    }

    /// Apply the changes on top of `existing`, keeping its id and
    /// registration date.
    pub fn apply(self, existing: &Student) -> Student {
        Student {
            id: existing.id,
            name: self.name.unwrap_or_else(|| existing.name.clone()),
            grade: self.grade.unwrap_or_else(|| existing.grade.clone()),
            student_id: self
                .student_id
                .unwrap_or_else(|| existing.student_id.clone()),
            email: self.email.unwrap_or_else(|| existing.email.clone()),
            phone_number: self
                .phone_number
                .unwrap_or_else(|| existing.phone_number.clone()),
            device_id: self
                .device_id
                .unwrap_or_else(|| existing.device_id.clone()),
            is_active: self.is_active.unwrap_or(existing.is_active),
            registration_date: existing.registration_date,
        }
    }
}

fn email_or_empty(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() || email.validate_email() {
        Ok(())
    } else {
        Err(ValidationError::new("email").with_message(Cow::Borrowed("Email is invalid")))
    }
}
