//! Axum application setup
//!
//! Creates and configures the Axum application with routes and middleware.

use crate::{config::Settings, store::StudentRepository};
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Student record repository
    pub repository: Arc<dyn StudentRepository>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

/// Create the main Axum application with routes and middleware
pub fn create_app(repository: Arc<dyn StudentRepository>, settings: Settings) -> Router {
    let state = AppState {
        repository,
        start_time: std::time::Instant::now(),
    };

    let mut router = Router::new()
        .route(
            "/students",
            get(super::handlers::list_students).post(super::handlers::create_student),
        )
        .route(
            "/students/{id}",
            get(super::handlers::get_student)
                .put(super::handlers::update_student)
                .delete(super::handlers::delete_student),
        )
        .route("/ping", get(super::handlers::ping))
        .layer(TraceLayer::new_for_http());

    if settings.server.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }

    router.with_state(state)
}
