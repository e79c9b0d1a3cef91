//! Type definitions for the student service
//!
//! This module contains the student document model and the request/response
//! structures for the HTTP surface.

pub mod request;
pub mod response;
pub mod student;

pub use request::{CreateStudentRequest, UpdateStudentRequest};
pub use response::{DeleteStudentResponse, ErrorResponse, PingResponse, StudentResponse};
pub use student::Student;
