//! Student entity model and DTOs.

use chrono::NaiveDate;
use enroll_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::not_blank;
use crate::models::status::RecordStatus;

/// A row from the `students` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: DbId,
    pub name: String,
    pub email: String,
    /// Course reference: a course name, or a course id as decimal text.
    pub course: String,
    pub enrollment_date: NaiveDate,
    pub status: RecordStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new student.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudent {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(custom(function = "not_blank"))]
    pub course: String,
    pub enrollment_date: NaiveDate,
    /// Defaults to `Active` if omitted.
    pub status: Option<RecordStatus>,
}

/// DTO for updating an existing student. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudent {
    #[validate(custom(function = "not_blank"))]
    pub name: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub course: Option<String>,
    pub enrollment_date: Option<NaiveDate>,
    pub status: Option<RecordStatus>,
}

/// Optional filters for listing students.
#[derive(Debug, Clone, Default)]
pub struct StudentFilter {
    pub status: Option<RecordStatus>,
    pub course: Option<String>,
}
