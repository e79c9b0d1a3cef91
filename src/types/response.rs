//! Response type definitions
//!
//! Defines the JSON structures returned by the student endpoints.

use crate::types::Student;
use serde::{Deserialize, Serialize};

/// A student record as returned to HTTP clients
///
/// The document `_id` is exposed as a hex string `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentResponse {
    /// Generated document id as a 24-character hex string
    pub id: String,
    /// Student name
    pub name: String,
    /// Student age
    pub age: i32,
    /// Enrolled course
    pub course: String,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self {
            id: student.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: student.name,
            age: student.age,
            course: student.course,
        }
    }
}

/// Response for `DELETE /students/{id}`
///
/// `student` is the deleted record, or null when no record had that id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteStudentResponse {
    /// Outcome message, always "Student deleted"
    pub message: String,
    /// The deleted record, if one existed
    pub student: Option<StudentResponse>,
}

impl DeleteStudentResponse {
    /// Create a delete response for an optional deleted record
    pub fn new(student: Option<Student>) -> Self {
        Self {
            message: "Student deleted".to_string(),
            student: student.map(Into::into),
        }
    }
}

/// Error response for API errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Ping response for health checks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingResponse {
    /// Server uptime in seconds
    pub server_uptime: u64,

    /// Server version
    pub version: String,
}

impl PingResponse {
    /// Create a new ping response
    pub fn new(server_uptime: u64, version: impl Into<String>) -> Self {
        Self {
            server_uptime,
            version: version.into(),
        }
    }
}
