//! # Course Resource Handler
//!
//! Executes one business operation per request against the injected
//! [`CourseStore`] and normalizes the result into a [`CourseError`]
//! outcome. No HTTP types appear here; status codes are chosen by
//! [`AppError`](crate::error::AppError) at the transport boundary.
//!
//! ## Error Mapping
//!
//! | Store result                  | Outcome                              |
//! |-------------------------------|--------------------------------------|
//! | `find_by_id` → `None`         | `NotFound`                           |
//! | `StoreError::RecordNotFound`  | `NotFound` (update, delete)          |
//! | any other `StoreError`        | `Internal` with an opaque message    |
//!
//! Each operation makes exactly one store call and never retries.

use std::sync::Arc;

use course_core::{Course, CourseId, CoursePatch, NewCourse};
use thiserror::Error;

use crate::error::INTERNAL_SERVER_ERROR;
use crate::store::{CourseStore, StoreError};

/// Caller-visible message for a missing course.
pub const COURSE_NOT_FOUND: &str = "Course not found";

/// Caller-visible message for a failed delete.
pub const DELETE_FAILED: &str = "Failed to delete course";

/// Non-success outcome of a course operation.
#[derive(Error, Debug)]
pub enum CourseError {
    /// The referenced course does not exist.
    #[error("Course not found")]
    NotFound,

    /// The store failed. `message` is what the caller sees.
    #[error("{message}")]
    Internal {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl CourseError {
    fn internal(message: &'static str, source: StoreError) -> Self {
        Self::Internal { message, source }
    }

    /// Translate a mutating-store failure: a missing row is `NotFound`,
    /// anything else is internal with `message`.
    fn from_store(err: StoreError, message: &'static str) -> Self {
        match err {
            StoreError::RecordNotFound { .. } => Self::NotFound,
            other => Self::internal(message, other),
        }
    }
}

/// Stateless request handler over a shared store.
#[derive(Clone)]
pub struct CourseHandler {
    store: Arc<dyn CourseStore>,
}

impl std::fmt::Debug for CourseHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CourseHandler").finish_non_exhaustive()
    }
}

impl CourseHandler {
    pub fn new(store: Arc<dyn CourseStore>) -> Self {
        Self { store }
    }

    /// The underlying store, for health checks.
    pub fn store(&self) -> &dyn CourseStore {
        self.store.as_ref()
    }

    /// Every course, in store order.
    pub async fn list(&self) -> Result<Vec<Course>, CourseError> {
        self.store
            .find_all()
            .await
            .map_err(|e| CourseError::internal(INTERNAL_SERVER_ERROR, e))
    }

    pub async fn get(&self, id: CourseId) -> Result<Course, CourseError> {
        self.store
            .find_by_id(id)
            .await
            .map_err(|e| CourseError::internal(INTERNAL_SERVER_ERROR, e))?
            .ok_or(CourseError::NotFound)
    }

    /// Insert a new course. Not idempotent.
    pub async fn create(&self, course: NewCourse) -> Result<Course, CourseError> {
        let created = self
            .store
            .insert(course)
            .await
            .map_err(|e| CourseError::internal(INTERNAL_SERVER_ERROR, e))?;
        tracing::info!(course_id = created.id, "course created");
        Ok(created)
    }

    /// Apply a partial update. Unsupplied fields keep their values.
    pub async fn update(&self, id: CourseId, patch: CoursePatch) -> Result<Course, CourseError> {
        let updated = self
            .store
            .update(id, patch)
            .await
            .map_err(|e| CourseError::from_store(e, INTERNAL_SERVER_ERROR))?;
        tracing::debug!(course_id = updated.id, "course updated");
        Ok(updated)
    }

    /// Delete a course, returning its last known state.
    pub async fn delete(&self, id: CourseId) -> Result<Course, CourseError> {
        let deleted = self
            .store
            .delete(id)
            .await
            .map_err(|e| CourseError::from_store(e, DELETE_FAILED))?;
        tracing::info!(course_id = deleted.id, "course deleted");
        Ok(deleted)
    }
}
