//! Course entity model and DTOs.

use enroll_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use crate::models::not_blank;
use crate::models::status::RecordStatus;

/// A row from the `courses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub duration: i32,
    pub status: RecordStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Students may reference a course by id written as text, so an all-digit
/// name would be indistinguishable from another course's id.
fn course_name(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    if value.trim().chars().all(|c| c.is_ascii_digit()) {
        let mut err = ValidationError::new("numeric");
        err.message = Some("must not consist only of digits".into());
        return Err(err);
    }
    Ok(())
}

/// DTO for creating a new course.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourse {
    #[validate(custom(function = "course_name"))]
    pub name: String,
    #[validate(custom(function = "not_blank"))]
    pub description: String,
    #[validate(range(min = 1, message = "must be a positive number"))]
    pub duration: i32,
    /// Defaults to `Active` if omitted.
    pub status: Option<RecordStatus>,
}

/// DTO for updating an existing course. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourse {
    #[validate(custom(function = "course_name"))]
    pub name: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub description: Option<String>,
    #[validate(range(min = 1, message = "must be a positive number"))]
    pub duration: Option<i32>,
    pub status: Option<RecordStatus>,
}
