//! # course-api: Binary Entry Point
//!
//! Starts the Axum HTTP server for the course catalog.
//! Binds to `0.0.0.0` on the configured port (default 3000).

use std::sync::Arc;

use course_api::db::courses::PgCourseStore;
use course_api::state::{AppConfig, AppState};
use course_api::store::{CourseStore, MemoryCourseStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    tracing::debug!(?config, "configuration loaded");

    // Select the course store: Postgres when configured, in-memory otherwise.
    let store: Arc<dyn CourseStore> = match &config.database_url {
        Some(url) => {
            let pool = course_api::db::init_pool(url).await.map_err(|e| {
                tracing::error!("Database initialization failed: {e}");
                e
            })?;
            Arc::new(PgCourseStore::new(pool))
        }
        None => {
            tracing::warn!(
                "DATABASE_URL not set, running in-memory only mode. \
                 Courses will not survive restarts."
            );
            Arc::new(MemoryCourseStore::new())
        }
    };

    let port = config.port;
    let state = AppState::with_store(config, store);
    let app = course_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Course API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
