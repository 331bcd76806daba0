//! Repository for the `courses` table, including the referential guard.

use std::collections::BTreeMap;

use enroll_core::types::DbId;
use sqlx::PgPool;

use crate::models::course::{Course, CreateCourse, UpdateCourse};
use crate::models::status::RecordStatus;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, duration, status, created_at, updated_at";

/// Provides CRUD and counting operations for courses.
pub struct CourseRepo;

impl CourseRepo {
    /// Insert a new course, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to `Active`.
    pub async fn create(pool: &PgPool, input: &CreateCourse) -> Result<Course, sqlx::Error> {
        let query = format!(
            "INSERT INTO courses (name, description, duration, status)
             VALUES ($1, $2, $3, COALESCE($4, 'Active'::record_status))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(input.name.trim())
            .bind(input.description.trim())
            .bind(input.duration)
            .bind(input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a course by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Resolve a student's course reference (a course name or an id as text).
    ///
    /// A name match wins over an id match when both exist.
    pub async fn find_by_reference(
        pool: &PgPool,
        reference: &str,
    ) -> Result<Option<Course>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM courses
             WHERE name = $1 OR id::text = $1
             ORDER BY (name = $1) DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(reference.trim())
            .fetch_optional(pool)
            .await
    }

    /// List courses ordered by name, optionally restricted to one status.
    pub async fn list(
        pool: &PgPool,
        status: Option<RecordStatus>,
    ) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM courses
             WHERE ($1::record_status IS NULL OR status = $1)
             ORDER BY name"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Count courses, optionally restricted to one status.
    pub async fn count(pool: &PgPool, status: Option<RecordStatus>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM courses WHERE ($1::record_status IS NULL OR status = $1)",
        )
        .bind(status)
        .fetch_one(pool)
        .await
    }

    /// Group course records by their course key (the name) and count each group.
    pub async fn group_count_by_name(pool: &PgPool) -> Result<BTreeMap<String, i64>, sqlx::Error> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT name, COUNT(*) FROM courses GROUP BY name ORDER BY name",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().collect())
    }

    /// Number of students whose course reference points at this course,
    /// either by id or by name.
    pub async fn count_referencing_students(pool: &PgPool, id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM students s
             JOIN courses c ON s.course = c.name OR s.course = c.id::text
             WHERE c.id = $1",
        )
        .bind(id)
        .fetch_one(pool)
        .await
    }

    /// Referential guard: `false` while any student references the course.
    ///
    /// The check and a following [`CourseRepo::delete`] are not atomic; a
    /// student inserted in between will be left with a dangling reference.
    pub async fn can_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let referencing = Self::count_referencing_students(pool, id).await?;
        Ok(referencing == 0)
    }

    /// Update a course. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCourse,
    ) -> Result<Option<Course>, sqlx::Error> {
        let query = format!(
            "UPDATE courses SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                duration = COALESCE($4, duration),
                status = COALESCE($5, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(input.description.as_deref().map(str::trim))
            .bind(input.duration)
            .bind(input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a course by ID. Returns `true` if a row was removed.
    ///
    /// Does not consult the guard; callers check [`CourseRepo::can_delete`].
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
