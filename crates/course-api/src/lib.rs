//! # course-api: Axum API Service for the Course Catalog
//!
//! Exposes validated CRUD over course records. Requests are checked
//! against the static schemas in `course-core`, executed by the
//! [`handler::CourseHandler`] against an injected [`store::CourseStore`],
//! and their outcomes mapped to HTTP by [`error::AppError`].
//!
//! ## API Surface
//!
//! | Method | Path                 | Module                |
//! |--------|----------------------|-----------------------|
//! | GET    | `/courses`           | [`routes::courses`]   |
//! | POST   | `/courses`           | [`routes::courses`]   |
//! | GET    | `/courses/{id}`      | [`routes::courses`]   |
//! | PUT    | `/courses/{id}`      | [`routes::courses`]   |
//! | DELETE | `/courses/{id}`      | [`routes::courses`]   |
//! | GET    | `/health/liveness`   | probes                |
//! | GET    | `/health/readiness`  | probes                |
//! | GET    | `/openapi.json`      | [`openapi`]           |
//!
//! Any other path answers 404 `{"error": "NOT_FOUND"}`; an unsupported
//! method on a course path answers 405 with the same body shape.
//!
//! ## Storage
//!
//! With `DATABASE_URL` set, courses live in Postgres ([`db::courses`]).
//! Otherwise the in-memory [`store::MemoryCourseStore`] is used.

pub mod db;
pub mod error;
pub mod extractors;
pub mod handler;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod store;

use axum::extract::{DefaultBodyLimit, State};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::state::AppState;

/// Maximum accepted request body size.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Message for requests that match no route.
pub const ROUTE_NOT_FOUND: &str = "NOT_FOUND";

/// Message for requests whose path matches but whose method does not.
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::courses::router())
        .merge(openapi::router())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES));

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new()
        .merge(health)
        .merge(api)
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness probe: always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: 200 when the course store answers, 503 otherwise.
async fn readiness(State(state): State<AppState>) -> Result<&'static str, AppError> {
    state.courses.store().ping().await.map_err(|e| {
        tracing::warn!("Course store health check failed: {e}");
        AppError::ServiceUnavailable("store unavailable".to_string())
    })?;
    Ok("ready")
}

async fn route_not_found() -> AppError {
    AppError::NotFound(ROUTE_NOT_FOUND.to_string())
}

pub(crate) async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed(METHOD_NOT_ALLOWED.to_string())
}
