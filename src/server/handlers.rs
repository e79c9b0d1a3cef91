//! HTTP request handlers
//!
//! Implementation of the student CRUD endpoints. Each handler maps a
//! repository result straight onto a status code: 400 for write-path
//! failures including validation, 404 for a missing record, 500 for
//! read-path/storage failures. All errors are surfaced as `{message}`.

use crate::{
    server::app::AppState,
    types::{
        CreateStudentRequest, DeleteStudentResponse, ErrorResponse, PingResponse, StudentResponse,
        UpdateStudentRequest,
    },
    utils::version,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// List all students
///
/// GET /students
///
/// Returns the full set of student records as a JSON array.
pub async fn list_students(State(state): State<AppState>) -> Response {
    match state.repository.list().await {
        Ok(students) => {
            let body: Vec<StudentResponse> = students.into_iter().map(Into::into).collect();
            tracing::debug!("Listed {} students", body.len());
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to list students: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string())),
            )
                .into_response()
        }
    }
}

/// Get a student by id
///
/// GET /students/{id}
pub async fn get_student(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.repository.find_by_id(&id).await {
        Ok(Some(student)) => (StatusCode::OK, Json(StudentResponse::from(student))).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Student not found")),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch student {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string())),
            )
                .into_response()
        }
    }
}

/// Create a new student
///
/// POST /students
///
/// The body is read as bytes and deserialized explicitly so malformed or
/// incomplete payloads map to 400 rather than axum's default 422.
pub async fn create_student(State(state): State<AppState>, body: axum::body::Bytes) -> Response {
    let request: CreateStudentRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::debug!("Rejected create payload: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(format!("Invalid request body: {}", e))),
            )
                .into_response();
        }
    };

    if let Err(e) = request.validate() {
        tracing::debug!("Create validation failed: {}", e);
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(e.to_string())),
        )
            .into_response();
    }

    match state.repository.insert(&request).await {
        Ok(student) => {
            tracing::info!("Created student {:?}", student.id);
            (StatusCode::CREATED, Json(StudentResponse::from(student))).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to create student: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(e.to_string())),
            )
                .into_response()
        }
    }
}

/// Update a student by id
///
/// PUT /students/{id}
///
/// Fields present in the payload overwrite stored values; absent fields keep
/// their prior values. An unknown id returns 404.
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: axum::body::Bytes,
) -> Response {
    let request: UpdateStudentRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::debug!("Rejected update payload: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(format!("Invalid request body: {}", e))),
            )
                .into_response();
        }
    };

    if let Err(e) = request.validate() {
        tracing::debug!("Update validation failed: {}", e);
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(e.to_string())),
        )
            .into_response();
    }

    match state.repository.update(&id, &request).await {
        Ok(Some(student)) => (StatusCode::OK, Json(StudentResponse::from(student))).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Student not found")),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to update student {}: {}", id, e);
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(e.to_string())),
            )
                .into_response()
        }
    }
}

/// Delete a student by id
///
/// DELETE /students/{id}
///
/// Returns the deleted record, or `student: null` when no record had the id.
pub async fn delete_student(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.repository.delete(&id).await {
        Ok(student) => {
            if student.is_some() {
                tracing::info!("Deleted student {}", id);
            }
            (StatusCode::OK, Json(DeleteStudentResponse::new(student))).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to delete student {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string())),
            )
                .into_response()
        }
    }
}

/// Ping endpoint for health checks
///
/// GET /ping
///
/// Returns server status and uptime information.
pub async fn ping(State(state): State<AppState>) -> Json<PingResponse> {
    let uptime = state.start_time.elapsed().as_secs();
    Json(PingResponse::new(uptime, version::get_version()))
}
