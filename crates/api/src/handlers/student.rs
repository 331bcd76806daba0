//! Handlers for the `/students` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use enroll_core::error::CoreError;
use enroll_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use enroll_core::types::DbId;
use enroll_db::models::student::{CreateStudent, Student, StudentFilter, UpdateStudent};
use enroll_db::repositories::{CourseRepo, StudentRepo};
use enroll_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::{PathParam, QueryParams, ValidatedJson};
use crate::query::StudentListParams;
use crate::response::MessageResponse;
use crate::state::AppState;

fn student_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Student",
        id,
    })
}

/// Reject course references that resolve to no existing course.
async fn ensure_course_exists(pool: &DbPool, reference: &str) -> AppResult<()> {
    if CourseRepo::find_by_reference(pool, reference).await?.is_none() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "course '{}' does not exist",
            reference.trim()
        ))));
    }
    Ok(())
}

/// POST /api/v1/students
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateStudent>,
) -> AppResult<(StatusCode, Json<Student>)> {
    ensure_course_exists(&state.pool, &input.course).await?;
    let student = StudentRepo::create(&state.pool, &input).await?;
    tracing::info!(student_id = student.id, course = %student.course, "Student created");
    Ok((StatusCode::CREATED, Json(student)))
}

/// GET /api/v1/students
pub async fn list(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<StudentListParams>,
) -> AppResult<Json<Vec<Student>>> {
    let filter = StudentFilter {
        status: params.status,
        course: params.course,
    };
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);
    let students = StudentRepo::list(&state.pool, &filter, limit, offset).await?;
    Ok(Json(students))
}

/// GET /api/v1/students/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Student>> {
    let student = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| student_not_found(id))?;
    Ok(Json(student))
}

/// PUT /api/v1/students/{id}
///
/// A missing student is reported before an unknown course reference.
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateStudent>,
) -> AppResult<Json<Student>> {
    if let Some(course) = &input.course {
        if StudentRepo::find_by_id(&state.pool, id).await?.is_none() {
            return Err(student_not_found(id));
        }
        ensure_course_exists(&state.pool, course).await?;
    }
    let student = StudentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| student_not_found(id))?;
    Ok(Json(student))
}

/// DELETE /api/v1/students/{id}
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = StudentRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(student_id = id, "Student deleted");
        Ok(Json(MessageResponse::new("Student deleted successfully")))
    } else {
        Err(student_not_found(id))
    }
}
