//! Query parameter types for list endpoints.

use enroll_db::models::status::RecordStatus;
use serde::Deserialize;

/// `GET /students?status=&course=&limit=&offset=`.
///
/// Values are clamped with `enroll_core::pagination`.
#[derive(Debug, Deserialize)]
pub struct StudentListParams {
    pub status: Option<RecordStatus>,
    pub course: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// `GET /courses?status=`.
#[derive(Debug, Deserialize)]
pub struct CourseListParams {
    pub status: Option<RecordStatus>,
}
