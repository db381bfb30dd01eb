//! # API Route Modules
//!
//! - `courses`: CRUD over the course catalog.

pub mod courses;
