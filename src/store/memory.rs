//! In-memory student repository
//!
//! A map-backed implementation of [`StudentRepository`] used by the test
//! suite so the HTTP surface can be exercised without a running database.
//! Semantics mirror the MongoDB implementation, including the treatment of
//! unparseable ids as not-found.

use crate::Result;
use crate::store::StudentRepository;
use crate::types::{CreateStudentRequest, Student, UpdateStudentRequest};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::collections::HashMap;
use std::sync::RwLock;

/// Map-backed student repository
#[derive(Debug, Default)]
pub struct InMemoryStudentRepository {
    students: RwLock<HashMap<ObjectId, Student>>,
}

impl InMemoryStudentRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.students.read().expect("lock poisoned").len()
    }

    /// True when no records are stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn list(&self) -> Result<Vec<Student>> {
        let students = self.students.read().expect("lock poisoned");
        Ok(students.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Student>> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let students = self.students.read().expect("lock poisoned");
        Ok(students.get(&oid).cloned())
    }

    async fn insert(&self, request: &CreateStudentRequest) -> Result<Student> {
        let oid = ObjectId::new();
        let student = Student {
            id: Some(oid),
            name: request.name.clone(),
            age: request.age,
            course: request.course.clone(),
        };

        let mut students = self.students.write().expect("lock poisoned");
        students.insert(oid, student.clone());
        Ok(student)
    }

    async fn update(&self, id: &str, request: &UpdateStudentRequest) -> Result<Option<Student>> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let mut students = self.students.write().expect("lock poisoned");
        let Some(student) = students.get_mut(&oid) else {
            return Ok(None);
        };

        if let Some(name) = &request.name {
            student.name = name.clone();
        }
        if let Some(age) = request.age {
            student.age = age;
        }
        if let Some(course) = &request.course {
            student.course = course.clone();
        }

        Ok(Some(student.clone()))
    }

    async fn delete(&self, id: &str) -> Result<Option<Student>> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let mut students = self.students.write().expect("lock poisoned");
        Ok(students.remove(&oid))
    }
}
