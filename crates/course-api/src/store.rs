//! # Course Store
//!
//! The data-access interface the request handler talks to, and the
//! in-memory implementation used when no database is configured.
//!
//! ## Error Contract
//!
//! `update` and `delete` report a missing row as
//! [`StoreError::RecordNotFound`]. That is the only store failure the
//! handler translates specifically; every other variant becomes an opaque
//! internal error at the API boundary.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use axum::async_trait;
use course_core::{Course, CourseId, CoursePatch, NewCourse};
use parking_lot::RwLock;
use thiserror::Error;

/// Failure reported by a [`CourseStore`].
#[derive(Error, Debug)]
pub enum StoreError {
    /// No row matched the requested id.
    #[error("no course record with id {id}")]
    RecordNotFound { id: CourseId },

    /// The database driver reported an error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The store cannot serve requests.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Persistent course repository.
///
/// Implementations guarantee that `insert`, `update` and `delete` are
/// atomic per record.
#[async_trait]
pub trait CourseStore: Send + Sync {
    /// Every stored course, ordered by id.
    async fn find_all(&self) -> Result<Vec<Course>, StoreError>;

    /// The course with `id`, if any.
    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, StoreError>;

    /// Persist a new course and return it with its assigned id.
    async fn insert(&self, course: NewCourse) -> Result<Course, StoreError>;

    /// Merge `patch` onto the course with `id` and return the result.
    async fn update(&self, id: CourseId, patch: CoursePatch) -> Result<Course, StoreError>;

    /// Remove the course with `id` and return its last state.
    async fn delete(&self, id: CourseId) -> Result<Course, StoreError>;

    /// Cheap health check used by the readiness probe.
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

// -- In-Memory Store ----------------------------------------------------------

/// Thread-safe, cloneable in-memory course store.
///
/// The lock is `parking_lot` and never held across `.await`. Ids come from
/// a monotonically increasing sequence starting at 1 and are never reused.
#[derive(Debug, Clone)]
pub struct MemoryCourseStore {
    courses: Arc<RwLock<BTreeMap<i64, Course>>>,
    next_id: Arc<AtomicI64>,
}

impl MemoryCourseStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            courses: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// Number of stored courses.
    pub fn len(&self) -> usize {
        self.courses.read().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryCourseStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CourseStore for MemoryCourseStore {
    async fn find_all(&self) -> Result<Vec<Course>, StoreError> {
        Ok(self.courses.read().values().cloned().collect())
    }

    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, StoreError> {
        Ok(self.courses.read().get(&id.get()).cloned())
    }

    async fn insert(&self, course: NewCourse) -> Result<Course, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let course = course.into_course(id);
        self.courses.write().insert(id, course.clone());
        Ok(course)
    }

    async fn update(&self, id: CourseId, patch: CoursePatch) -> Result<Course, StoreError> {
        let mut guard = self.courses.write();
        let course = guard
            .get_mut(&id.get())
            .ok_or(StoreError::RecordNotFound { id })?;
        course.apply(&patch);
        Ok(course.clone())
    }

    async fn delete(&self, id: CourseId) -> Result<Course, StoreError> {
        self.courses
            .write()
            .remove(&id.get())
            .ok_or(StoreError::RecordNotFound { id })
    }
}
