//! Request type definitions
//!
//! Defines the create and update payloads for the student endpoints.
//! Required-field validation happens here, before any persistence call.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Payload for `POST /students`
///
/// All three fields are required; missing fields fail deserialization and
/// empty text fields fail [`CreateStudentRequest::validate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStudentRequest {
    /// Student name, must be non-empty
    pub name: String,
    /// Student age
    pub age: i32,
    /// Enrolled course, must be non-empty
    pub course: String,
}

impl CreateStudentRequest {
    /// Check the required-field invariants
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::validation("name", "must not be empty"));
        }
        if self.course.trim().is_empty() {
            return Err(Error::validation("course", "must not be empty"));
        }
        Ok(())
    }
}

/// Payload for `PUT /students/{id}`
///
/// Every field is optional; only fields present in the payload overwrite the
/// stored values. A provided `name` or `course` must still be non-empty so a
/// partial update cannot break the stored-record invariant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStudentRequest {
    /// New student name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New student age
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    /// New enrolled course
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
}

impl UpdateStudentRequest {
    /// Check that provided fields keep the stored-record invariants
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err(Error::validation("name", "must not be empty"));
        }
        if let Some(course) = &self.course
            && course.trim().is_empty()
        {
            return Err(Error::validation("course", "must not be empty"));
        }
        Ok(())
    }

    /// True when the payload carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.course.is_none()
    }
}
