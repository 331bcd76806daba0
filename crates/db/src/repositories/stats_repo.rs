//! Dashboard statistics over the student and course stores.

use enroll_core::stats::{StatsCounts, StatsSnapshot};
use sqlx::PgPool;

use crate::models::status::RecordStatus;
use crate::repositories::{CourseRepo, StudentRepo};

/// Aggregates counts from both stores into a [`StatsSnapshot`].
pub struct StatsRepo;

impl StatsRepo {
    /// Compute the dashboard snapshot.
    ///
    /// Each figure comes from its own query; there is no shared transaction.
    /// The first failing query aborts the computation.
    pub async fn compute(pool: &PgPool) -> Result<StatsSnapshot, sqlx::Error> {
        let counts = StatsCounts {
            total_students: StudentRepo::count(pool, None).await?,
            active_students: StudentRepo::count(pool, Some(RecordStatus::Active)).await?,
            total_courses: CourseRepo::count(pool, None).await?,
            active_courses: CourseRepo::count(pool, Some(RecordStatus::Active)).await?,
            graduates: StudentRepo::count(pool, Some(RecordStatus::Inactive)).await?,
            course_counts: CourseRepo::group_count_by_name(pool).await?,
            enrollments_by_course: StudentRepo::group_count_by_course(pool).await?,
        };
        tracing::debug!(
            total_students = counts.total_students,
            total_courses = counts.total_courses,
            graduates = counts.graduates,
            "Computed dashboard counts"
        );
        Ok(StatsSnapshot::from(counts))
    }
}
