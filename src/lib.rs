//! Student API - Minimal CRUD service for student records
//!
//! A small HTTP service exposing create/read/update/delete operations for a
//! single "student" record (name, age, course) backed by MongoDB. Route
//! handlers map directly onto document-store calls; there are no intermediate
//! layers.
//!
//! # Architecture
//!
//! - **HTTP Router**: axum routes for the five student endpoints plus a
//!   `/ping` health check
//! - **Persistence Adapter**: a [`StudentRepository`] trait backed by a
//!   MongoDB collection (an in-memory implementation backs the test suite)
//!
//! # Usage
//!
//! ```bash
//! student-api --port 3000 --database-uri mongodb://localhost:27017
//! ```
//!
//! # Examples
//!
//! ```rust
//! use student_api::{Settings, server::create_app, store::InMemoryStudentRepository};
//! use std::sync::Arc;
//!
//! let settings = Settings::default();
//! let repository = Arc::new(InMemoryStudentRepository::new());
//! let app = create_app(repository, settings);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod server;
pub mod store;
pub mod types;
pub mod utils;

pub use config::{ConfigLoader, Settings};
pub use error::{Error, Result};
pub use store::{InMemoryStudentRepository, MongoStudentRepository, StudentRepository};
pub use types::{
    CreateStudentRequest, DeleteStudentResponse, ErrorResponse, PingResponse, Student,
    StudentResponse, UpdateStudentRequest,
};
