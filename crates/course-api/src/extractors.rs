//! # Request Extraction & Validation
//!
//! Helpers that turn raw Axum extractor results into validated inputs.
//! Route functions take the `Result<_, Rejection>` form of each extractor
//! so every malformed request, including one the framework itself rejects,
//! surfaces as a 422 with a `"<message> on <path>"` body. Oversized
//! bodies are the exception and keep their 413.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use course_core::validation::{BODY_PATH, ID_PATH};
use course_core::{CourseId, ValidationFailure};
use serde_json::Value;

use crate::error::AppError;

/// Caller-visible message when the body exceeds the configured limit.
pub const PAYLOAD_TOO_LARGE: &str = "Request body too large";

/// Extract the `{id}` path segment as a [`CourseId`].
pub fn extract_course_id(
    result: Result<Path<String>, PathRejection>,
) -> Result<CourseId, AppError> {
    let Path(raw) = result.map_err(|err| ValidationFailure::new(err.body_text(), ID_PATH))?;
    Ok(course_core::parse_id(&raw)?)
}

/// Extract a JSON body and run `validate` over it.
///
/// Deserialization failures (bad syntax, wrong content type) are reported
/// against the `body` path; schema failures carry the field path. A body
/// over the size limit is a 413, not a validation failure.
pub fn extract_validated_json<T>(
    result: Result<Json<Value>, JsonRejection>,
    validate: impl FnOnce(&Value) -> Result<T, ValidationFailure>,
) -> Result<T, AppError> {
    let Json(value) = result.map_err(|err| {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(PAYLOAD_TOO_LARGE.to_string())
        } else {
            ValidationFailure::new(err.body_text(), BODY_PATH).into()
        }
    })?;
    Ok(validate(&value)?)
}
