//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor. Built once in `main` and cloned per request;
//! the course store is injected here and nowhere else.

use std::sync::Arc;

use crate::handler::CourseHandler;
use crate::store::{CourseStore, MemoryCourseStore};

/// Default listen port.
pub const DEFAULT_PORT: u16 = 3000;

/// Runtime configuration, read from the environment.
///
/// Custom `Debug` redacts the database URL to keep credentials out of logs.
#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// TCP port to bind on all interfaces (`PORT`).
    pub port: u16,
    /// Postgres connection string (`DATABASE_URL`). `None` selects the in-memory store.
    pub database_url: Option<String>,
}

impl AppConfig {
    /// Build configuration from `PORT` and `DATABASE_URL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "invalid PORT, using default {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        Self { port, database_url }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field("database_url", &self.database_url.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
        }
    }
}

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub courses: CourseHandler,
}

impl AppState {
    /// State over an explicit store.
    pub fn with_store(config: AppConfig, store: Arc<dyn CourseStore>) -> Self {
        Self {
            config,
            courses: CourseHandler::new(store),
        }
    }

    /// Default configuration over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::with_store(AppConfig::default(), Arc::new(MemoryCourseStore::new()))
    }
}
