//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented course routes into a single OpenAPI
//! document served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the course API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Course Catalog API",
        version = "0.1.0",
        description = "Validated CRUD over course records.",
        license(name = "MIT")
    ),
    paths(
        crate::routes::courses::list_courses,
        crate::routes::courses::get_course,
        crate::routes::courses::create_course,
        crate::routes::courses::update_course,
        crate::routes::courses::delete_course,
    ),
    components(schemas(
        course_core::Course,
        course_core::NewCourse,
        course_core::CoursePatch,
        crate::error::ErrorBody,
    )),
    tags(
        (name = "courses", description = "Course records"),
    )
)]
pub struct ApiDoc;

/// Router serving the OpenAPI document.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_lists_course_paths() {
        let spec = ApiDoc::openapi();
        let paths: Vec<&String> = spec.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/courses"));
        assert!(paths.iter().any(|p| p.as_str() == "/courses/{id}"));
    }

    #[test]
    fn spec_serializes_to_json() {
        let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert_eq!(json["info"]["title"], "Course Catalog API");
        assert!(json["components"]["schemas"]["Course"].is_object());
    }

    #[test]
    fn request_bodies_reference_input_schemas() {
        let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let schema_ref = |path: &str, method: &str| {
            json["paths"][path][method]["requestBody"]["content"]["application/json"]["schema"]
                ["$ref"]
                .clone()
        };
        assert_eq!(
            schema_ref("/courses", "post"),
            "#/components/schemas/NewCourse"
        );
        assert_eq!(
            schema_ref("/courses/{id}", "put"),
            "#/components/schemas/CoursePatch"
        );
    }
}
