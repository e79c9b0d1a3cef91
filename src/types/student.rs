//! Student document model
//!
//! The persisted shape of a student record. The `_id` is assigned by the
//! persistence layer on insert and is immutable afterwards.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A student record as stored in the document collection
///
/// Invariant: every stored record has non-empty `name` and `course` and a
/// present `age`. This is enforced by request validation before any write.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Student {
    /// Document id, generated on insert
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Student name, required and non-empty
    pub name: String,

    /// Student age, required
    pub age: i32,

    /// Enrolled course, required and non-empty
    pub course: String,
}

impl Student {
    /// Create a new student record without an id
    ///
    /// The id is assigned by the repository when the record is inserted.
    pub fn new(name: impl Into<String>, age: i32, course: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            age,
            course: course.into(),
        }
    }
}
