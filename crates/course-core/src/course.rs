//! # Course Records
//!
//! The persisted [`Course`] and the validated inputs used to create and
//! update one.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Store-assigned identifier of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub i64);

impl CourseId {
    /// Access the inner integer.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A course as held by the store.
///
/// `description` serializes as `null` when absent so every response
/// carries the full record shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Course {
    /// Unique, immutable, assigned by the store on insert.
    pub id: i64,
    /// Non-empty course title.
    pub title: String,
    pub description: Option<String>,
}

impl Course {
    /// Identifier of this course.
    pub fn course_id(&self) -> CourseId {
        CourseId(self.id)
    }

    /// Merge the supplied fields of `patch` onto this record.
    ///
    /// `id` and any field the patch leaves unset are untouched.
    pub fn apply(&mut self, patch: &CoursePatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
    }
}

/// Validated input for creating a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewCourse {
    /// Course title. Must not be empty.
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewCourse {
    /// Build the record a store persists under `id`.
    pub fn into_course(self, id: i64) -> Course {
        Course {
            id,
            title: self.title,
            description: self.description,
        }
    }
}

/// Validated partial update. Only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CoursePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CoursePatch {
    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}
