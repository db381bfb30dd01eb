//! # course-core: Domain Types for the Course Catalog
//!
//! Defines the single resource the catalog exposes, the typed inputs the
//! request handler accepts, and the statically declared schemas those
//! inputs are checked against.
//!
//! ## Key Design Principles
//!
//! 1. **Validate once, at the edge.** Raw JSON is checked against a
//!    [`Schema`](validation::Schema) and converted into [`NewCourse`] or
//!    [`CoursePatch`]. Downstream code only ever sees the typed form.
//!
//! 2. **Store-assigned identity.** [`Course::id`] is never supplied by the
//!    caller. [`CourseId`] wraps the integer parsed from the request path.
//!
//! ## Crate Policy
//!
//! - No I/O, no async, no dependency on the API crate.
//! - No `.unwrap()` outside tests.

pub mod course;
pub mod error;
pub mod validation;

pub use course::{Course, CourseId, CoursePatch, NewCourse};
pub use error::ValidationFailure;
pub use validation::{parse_id, validate, validate_create, validate_update, Schema};
