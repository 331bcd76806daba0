//! Handlers for the `/courses` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use enroll_core::error::CoreError;
use enroll_core::types::DbId;
use enroll_db::models::course::{Course, CreateCourse, UpdateCourse};
use enroll_db::repositories::{CourseRepo, StudentRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{PathParam, QueryParams, ValidatedJson};
use crate::query::CourseListParams;
use crate::response::MessageResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Course",
        id,
    })
}

/// POST /api/v1/courses
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateCourse>,
) -> AppResult<(StatusCode, Json<Course>)> {
    let course = CourseRepo::create(&state.pool, &input).await?;
    tracing::info!(course_id = course.id, name = %course.name, "Course created");
    Ok((StatusCode::CREATED, Json(course)))
}

/// GET /api/v1/courses
pub async fn list(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<CourseListParams>,
) -> AppResult<Json<Vec<Course>>> {
    let courses = CourseRepo::list(&state.pool, params.status).await?;
    Ok(Json(courses))
}

/// GET /api/v1/courses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Course>> {
    let course = CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(course))
}

/// PUT /api/v1/courses/{id}
///
/// Renaming a course that students reference by name is a conflict, since it
/// would leave those references dangling. The reference check and the update
/// are not atomic.
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateCourse>,
) -> AppResult<Json<Course>> {
    if let Some(new_name) = input.name.as_deref().map(str::trim) {
        let existing = CourseRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or_else(|| not_found(id))?;
        if new_name != existing.name
            && StudentRepo::count_by_course(&state.pool, &existing.name).await? > 0
        {
            return Err(AppError::Core(CoreError::Conflict(format!(
                "cannot rename: course '{}' is referenced by name by existing students",
                existing.name
            ))));
        }
    }

    let course = CourseRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(course))
}

/// DELETE /api/v1/courses/{id}
///
/// Consults the referential guard first. The guard and the delete are not
/// atomic.
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !CourseRepo::can_delete(&state.pool, id).await? {
        tracing::warn!(course_id = id, "Course deletion blocked by referencing students");
        return Err(AppError::Core(CoreError::course_in_use()));
    }

    if CourseRepo::delete(&state.pool, id).await? {
        tracing::info!(course_id = id, "Course deleted");
        Ok(Json(MessageResponse::new("Course deleted successfully")))
    } else {
        Err(not_found(id))
    }
}
