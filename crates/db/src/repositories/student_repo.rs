//! Repository for the `students` table.

use std::collections::BTreeMap;

use enroll_core::types::DbId;
use sqlx::PgPool;

use crate::models::status::RecordStatus;
use crate::models::student::{CreateStudent, Student, StudentFilter, UpdateStudent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, email, course, enrollment_date, status, created_at, updated_at";

/// Provides CRUD and counting operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a new student, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to `Active`.
    pub async fn create(pool: &PgPool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students (name, email, course, enrollment_date, status)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'Active'::record_status))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(input.name.trim())
            .bind(input.email.trim())
            .bind(input.course.trim())
            .bind(input.enrollment_date)
            .bind(input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a student by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List students matching `filter`, most recently created first.
    pub async fn list(
        pool: &PgPool,
        filter: &StudentFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM students
             WHERE ($1::record_status IS NULL OR status = $1)
               AND ($2::text IS NULL OR course = $2)
             ORDER BY created_at DESC, id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(filter.status)
            .bind(filter.course.as_deref())
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count students, optionally restricted to one status.
    pub async fn count(pool: &PgPool, status: Option<RecordStatus>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM students WHERE ($1::record_status IS NULL OR status = $1)",
        )
        .bind(status)
        .fetch_one(pool)
        .await
    }

    /// Count students whose course reference is exactly `course`.
    pub async fn count_by_course(pool: &PgPool, course: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students WHERE course = $1")
            .bind(course)
            .fetch_one(pool)
            .await
    }

    /// Group students by course reference and count each group.
    pub async fn group_count_by_course(pool: &PgPool) -> Result<BTreeMap<String, i64>, sqlx::Error> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT course, COUNT(*) FROM students GROUP BY course ORDER BY course",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().collect())
    }

    /// Update a student. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStudent,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE students SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                course = COALESCE($4, course),
                enrollment_date = COALESCE($5, enrollment_date),
                status = COALESCE($6, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(input.email.as_deref().map(str::trim))
            .bind(input.course.as_deref().map(str::trim))
            .bind(input.enrollment_date)
            .bind(input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a student by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
