//! Course persistence operations.
//!
//! All queries operate on the `courses` table. Mutations use `RETURNING`
//! so each operation is a single statement; an empty result means no row
//! matched and is reported as [`StoreError::RecordNotFound`].

use axum::async_trait;
use course_core::{Course, CourseId, CoursePatch, NewCourse};
use sqlx::PgPool;

use crate::store::{CourseStore, StoreError};

/// [`CourseStore`] backed by a Postgres connection pool.
#[derive(Debug, Clone)]
pub struct PgCourseStore {
    pool: PgPool,
}

impl PgCourseStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseStore for PgCourseStore {
    async fn find_all(&self) -> Result<Vec<Course>, StoreError> {
        let rows = sqlx::query_as::<_, CourseRow>(
            "SELECT id, title, description FROM courses ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CourseRow::into_record).collect())
    }

    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, StoreError> {
        let row = sqlx::query_as::<_, CourseRow>(
            "SELECT id, title, description FROM courses WHERE id = $1",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CourseRow::into_record))
    }

    async fn insert(&self, course: NewCourse) -> Result<Course, StoreError> {
        let row = sqlx::query_as::<_, CourseRow>(
            "INSERT INTO courses (title, description) VALUES ($1, $2)
             RETURNING id, title, description",
        )
        .bind(&course.title)
        .bind(&course.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_record())
    }

    async fn update(&self, id: CourseId, patch: CoursePatch) -> Result<Course, StoreError> {
        let row = sqlx::query_as::<_, CourseRow>(
            "UPDATE courses
             SET title = COALESCE($1, title), description = COALESCE($2, description)
             WHERE id = $3
             RETURNING id, title, description",
        )
        .bind(&patch.title)
        .bind(&patch.description)
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        row.map(CourseRow::into_record)
            .ok_or(StoreError::RecordNotFound { id })
    }

    async fn delete(&self, id: CourseId) -> Result<Course, StoreError> {
        let row = sqlx::query_as::<_, CourseRow>(
            "DELETE FROM courses WHERE id = $1 RETURNING id, title, description",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        row.map(CourseRow::into_record)
            .ok_or(StoreError::RecordNotFound { id })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Internal row type for SQLx mapping.
#[derive(sqlx::FromRow)]
struct CourseRow {
    id: i64,
    title: String,
    description: Option<String>,
}

impl CourseRow {
    fn into_record(self) -> Course {
        Course {
            id: self.id,
            title: self.title,
            description: self.description,
        }
    }
}
