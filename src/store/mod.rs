//! Persistence adapter for student records
//!
//! Defines the [`StudentRepository`] trait covering the five operations the
//! HTTP surface needs, the MongoDB-backed implementation, and an in-memory
//! implementation used by the test suite.

pub mod memory;
pub mod mongo;

pub use memory::InMemoryStudentRepository;
pub use mongo::MongoStudentRepository;

use crate::Result;
use crate::types::{CreateStudentRequest, Student, UpdateStudentRequest};
use async_trait::async_trait;

/// Repository operations against one collection of student documents
///
/// Ids are taken as strings straight from the request path. An id that does
/// not parse as a document id can match no record, so implementations treat
/// it as not-found rather than an error.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Return all student records (full-scan listing)
    async fn list(&self) -> Result<Vec<Student>>;

    /// Look up a single record by id
    async fn find_by_id(&self, id: &str) -> Result<Option<Student>>;

    /// Insert a new record, assigning its id
    async fn insert(&self, request: &CreateStudentRequest) -> Result<Student>;

    /// Apply a partial update and return the updated record, or `None` when
    /// no record has the given id
    async fn update(&self, id: &str, request: &UpdateStudentRequest) -> Result<Option<Student>>;

    /// Remove a record and return it, or `None` when no record had the id
    async fn delete(&self, id: &str) -> Result<Option<Student>>;
}
