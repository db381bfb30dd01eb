//! # Database Persistence Layer
//!
//! Postgres persistence for course records via SQLx.
//!
//! The database is **optional**. When `DATABASE_URL` is set the API stores
//! courses in PostgreSQL through [`courses::PgCourseStore`]. When absent it
//! falls back to the in-memory store, suitable for development and tests.

pub mod courses;

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

/// Connect to `url` and apply embedded migrations.
pub async fn init_pool(url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(5))
        .connect(url)
        .await?;

    tracing::info!("Connected to PostgreSQL");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations applied");

    Ok(pool)
}
