//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! This is the only place outcomes are translated into HTTP status codes.
//! Every error body has the shape `{"error": "<message>"}`; internal
//! diagnostics are logged, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use course_core::ValidationFailure;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::handler::{CourseError, COURSE_NOT_FOUND};

/// Caller-visible message for any unrecognised failure.
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request failed schema validation (422).
    #[error("{0}")]
    Validation(String),

    /// Referenced record or route does not exist (404).
    #[error("{0}")]
    NotFound(String),

    /// Route exists but not for this method (405).
    #[error("{0}")]
    MethodNotAllowed(String),

    /// Request body exceeds the configured limit (413).
    #[error("{0}")]
    PayloadTooLarge(String),

    /// Store or infrastructure failure (500). Only `message` reaches the client.
    #[error("{message}")]
    Internal { message: String, detail: String },

    /// A dependency is not ready (503).
    #[error("{0}")]
    ServiceUnavailable(String),
}

impl AppError {
    /// Return the HTTP status code for this error.
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            Self::Internal { message, detail } => {
                tracing::error!(public = %message, %detail, "internal server error")
            }
            Self::ServiceUnavailable(_) => tracing::warn!(error = %self, "service unavailable"),
            Self::Validation(_) | Self::PayloadTooLarge(_) => {
                tracing::debug!(error = %self, "request rejected")
            }
            Self::NotFound(_) | Self::MethodNotAllowed(_) => {}
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationFailure> for AppError {
    fn from(err: ValidationFailure) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<CourseError> for AppError {
    fn from(err: CourseError) -> Self {
        match err {
            CourseError::NotFound => Self::NotFound(COURSE_NOT_FOUND.to_string()),
            CourseError::Internal { message, source } => Self::Internal {
                message: message.to_string(),
                detail: source.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;
    use http_body_util::BodyExt;

    /// Helper to extract status and body from a Response.
    async fn response_parts(err: AppError) -> (StatusCode, ErrorBody) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[test]
    fn status_codes() {
        assert_eq!(
            AppError::Validation("x".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(AppError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::MethodNotAllowed("x".into()).status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            AppError::PayloadTooLarge("x".into()).status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            AppError::Internal {
                message: "x".into(),
                detail: "y".into(),
            }
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::ServiceUnavailable("x".into()).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn validation_failure_converts_with_field_path() {
        let err = AppError::from(ValidationFailure::required("title"));
        match err {
            AppError::Validation(msg) => assert_eq!(msg, "Required property on title"),
            other => panic!("expected Validation, got: {other:?}"),
        }
    }

    #[test]
    fn course_not_found_converts_to_not_found() {
        let err = AppError::from(CourseError::NotFound);
        assert!(matches!(&err, AppError::NotFound(msg) if msg == "Course not found"));
    }

    #[tokio::test]
    async fn into_response_validation() {
        let (status, body) =
            response_parts(ValidationFailure::expected("integer", "id").into()).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.error, "Expected integer on id");
    }

    #[tokio::test]
    async fn into_response_not_found() {
        let (status, body) = response_parts(CourseError::NotFound.into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "Course not found");
    }

    #[tokio::test]
    async fn into_response_internal_hides_details() {
        let err = CourseError::Internal {
            message: "Failed to delete course",
            source: StoreError::Unavailable("connection refused by db-7".into()),
        };
        let (status, body) = response_parts(err.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Failed to delete course");
        assert!(!body.error.contains("db-7"));
    }

    #[tokio::test]
    async fn into_response_generic_internal() {
        let err = CourseError::Internal {
            message: INTERNAL_SERVER_ERROR,
            source: StoreError::Unavailable("pool timed out".into()),
        };
        let (status, body) = response_parts(err.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn into_response_service_unavailable_is_json() {
        let (status, body) =
            response_parts(AppError::ServiceUnavailable("store unavailable".into())).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.error, "store unavailable");
    }

    #[test]
    fn error_body_serializes_flat() {
        let body = ErrorBody {
            error: "Course not found".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Course not found"}));
    }
}
