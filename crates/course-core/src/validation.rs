//! # Request Validation
//!
//! Statically declared request schemas and the check that enforces them.
//!
//! A [`Schema`] is a fixed table of [`FieldSpec`]s. [`validate`] walks the
//! table in declaration order against a JSON object and reports the first
//! defect as a [`ValidationFailure`]. [`validate_create`] and
//! [`validate_update`] run that check and then build the typed input the
//! handler consumes. Fields not declared in a schema are ignored.

use serde_json::{Map, Value};

use crate::course::{CourseId, CoursePatch, NewCourse};
use crate::error::ValidationFailure;

/// Path reported when the body as a whole is defective.
pub const BODY_PATH: &str = "body";

/// Path reported for the `{id}` path parameter.
pub const ID_PATH: &str = "id";

/// Type constraint on a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A JSON string of at least `min_len` characters.
    String { min_len: usize },
}

/// One declared field of a request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

/// A request body schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

/// Body of `POST /courses`.
pub const CREATE_COURSE: Schema = Schema {
    name: "CreateCourse",
    fields: &[
        FieldSpec {
            name: "title",
            kind: FieldKind::String { min_len: 1 },
            required: true,
        },
        FieldSpec {
            name: "description",
            kind: FieldKind::String { min_len: 0 },
            required: false,
        },
    ],
};

/// Body of `PUT /courses/{id}`. Every field is optional; `{}` is valid.
pub const UPDATE_COURSE: Schema = Schema {
    name: "UpdateCourse",
    fields: &[
        FieldSpec {
            name: "title",
            kind: FieldKind::String { min_len: 1 },
            required: false,
        },
        FieldSpec {
            name: "description",
            kind: FieldKind::String { min_len: 0 },
            required: false,
        },
    ],
};

/// Check `input` against `schema`.
pub fn validate(schema: &Schema, input: &Value) -> Result<(), ValidationFailure> {
    let object = as_object(input)?;
    for field in schema.fields {
        match object.get(field.name) {
            None if field.required => return Err(ValidationFailure::required(field.name)),
            None => {}
            Some(value) => check_kind(field, value)?,
        }
    }
    Ok(())
}

/// Validate a create body and build the typed input.
pub fn validate_create(input: &Value) -> Result<NewCourse, ValidationFailure> {
    validate(&CREATE_COURSE, input)?;
    let object = as_object(input)?;
    let title = string_field(object, "title")
        .ok_or_else(|| ValidationFailure::required("title"))?;
    Ok(NewCourse {
        title,
        description: string_field(object, "description"),
    })
}

/// Validate an update body and build the typed patch.
pub fn validate_update(input: &Value) -> Result<CoursePatch, ValidationFailure> {
    validate(&UPDATE_COURSE, input)?;
    let object = as_object(input)?;
    Ok(CoursePatch {
        title: string_field(object, "title"),
        description: string_field(object, "description"),
    })
}

/// Coerce the `{id}` path segment to a [`CourseId`].
///
/// Accepts an optional sign (`-1` is well-formed, it just never matches a
/// record). Whitespace, fractions and overflow are rejected.
pub fn parse_id(raw: &str) -> Result<CourseId, ValidationFailure> {
    raw.parse::<i64>()
        .map(CourseId)
        .map_err(|_| ValidationFailure::expected("integer", ID_PATH))
}

fn as_object(input: &Value) -> Result<&Map<String, Value>, ValidationFailure> {
    input
        .as_object()
        .ok_or_else(|| ValidationFailure::expected("object", BODY_PATH))
}

fn check_kind(field: &FieldSpec, value: &Value) -> Result<(), ValidationFailure> {
    match field.kind {
        FieldKind::String { min_len } => {
            let s = value
                .as_str()
                .ok_or_else(|| ValidationFailure::expected("string", field.name))?;
            if s.chars().count() < min_len {
                return Err(ValidationFailure::too_short(min_len, field.name));
            }
            Ok(())
        }
    }
}

fn string_field(object: &Map<String, Value>, name: &str) -> Option<String> {
    object.get(name).and_then(Value::as_str).map(str::to_owned)
}
