//! # Course API
//!
//! Routes:
//! - GET    /courses      : List every course
//! - GET    /courses/{id} : Fetch one course
//! - POST   /courses      : Create a course
//! - PUT    /courses/{id} : Partially update a course
//! - DELETE /courses/{id} : Delete a course
//!
//! Each route validates its path and body first (path before body), then
//! makes a single call into [`CourseHandler`](crate::handler::CourseHandler).

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use course_core::{validate_create, validate_update, Course};
use serde_json::Value;

use crate::error::AppError;
use crate::method_not_allowed;
use crate::extractors::{extract_course_id, extract_validated_json};
use crate::state::AppState;

/// Build the courses router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/courses",
            get(list_courses)
                .post(create_course)
                .fallback(method_not_allowed),
        )
        .route(
            "/courses/:id",
            get(get_course)
                .put(update_course)
                .delete(delete_course)
                .fallback(method_not_allowed),
        )
}

/// GET /courses: List every course.
#[utoipa::path(
    get,
    path = "/courses",
    responses(
        (status = 200, description = "All courses", body = [Course]),
        (status = 500, description = "Store failure", body = crate::error::ErrorBody),
    ),
    tag = "courses"
)]
pub(crate) async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<Course>>, AppError> {
    Ok(Json(state.courses.list().await?))
}

/// GET /courses/:id: Fetch one course.
#[utoipa::path(
    get,
    path = "/courses/{id}",
    params(("id" = i64, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course found", body = Course),
        (status = 404, description = "Not found", body = crate::error::ErrorBody),
        (status = 422, description = "Invalid id", body = crate::error::ErrorBody),
    ),
    tag = "courses"
)]
pub(crate) async fn get_course(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Course>, AppError> {
    let id = extract_course_id(id)?;
    Ok(Json(state.courses.get(id).await?))
}

/// POST /courses: Create a course.
#[utoipa::path(
    post,
    path = "/courses",
    request_body = course_core::NewCourse,
    responses(
        (status = 200, description = "Course created", body = Course),
        (status = 422, description = "Invalid body", body = crate::error::ErrorBody),
    ),
    tag = "courses"
)]
pub(crate) async fn create_course(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Course>, AppError> {
    let new = extract_validated_json(body, validate_create)?;
    Ok(Json(state.courses.create(new).await?))
}

/// PUT /courses/:id: Partially update a course.
#[utoipa::path(
    put,
    path = "/courses/{id}",
    params(("id" = i64, Path, description = "Course ID")),
    request_body = course_core::CoursePatch,
    responses(
        (status = 200, description = "Course updated", body = Course),
        (status = 404, description = "Not found", body = crate::error::ErrorBody),
        (status = 422, description = "Invalid id or body", body = crate::error::ErrorBody),
        (status = 500, description = "Store failure", body = crate::error::ErrorBody),
    ),
    tag = "courses"
)]
pub(crate) async fn update_course(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Course>, AppError> {
    let id = extract_course_id(id)?;
    let patch = extract_validated_json(body, validate_update)?;
    Ok(Json(state.courses.update(id, patch).await?))
}

/// DELETE /courses/:id: Delete a course and return its last state.
#[utoipa::path(
    delete,
    path = "/courses/{id}",
    params(("id" = i64, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course deleted", body = Course),
        (status = 404, description = "Not found", body = crate::error::ErrorBody),
        (status = 422, description = "Invalid id", body = crate::error::ErrorBody),
        (status = 500, description = "Store failure", body = crate::error::ErrorBody),
    ),
    tag = "courses"
)]
pub(crate) async fn delete_course(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Course>, AppError> {
    let id = extract_course_id(id)?;
    Ok(Json(state.courses.delete(id).await?))
}
