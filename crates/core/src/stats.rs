//! Dashboard statistics (snapshot type and success-rate arithmetic).
//!
//! The counts are gathered by `enroll_db::repositories::StatsRepo` with
//! independent queries; this module only combines them. Because the queries
//! do not share a transaction, a snapshot taken under concurrent writes may
//! be internally inconsistent (e.g. `active_students > total_students`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Raw counts read from the student and course stores.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsCounts {
    pub total_students: i64,
    pub active_students: i64,
    pub total_courses: i64,
    pub active_courses: i64,
    /// Students with status `Inactive`.
    pub graduates: i64,
    /// Course records grouped by their own course key (the course name).
    pub course_counts: BTreeMap<String, i64>,
    /// Students grouped by their course reference.
    pub enrollments_by_course: BTreeMap<String, i64>,
}

/// Summary statistics served by the dashboard endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub total_students: i64,
    pub total_courses: i64,
    pub active_students: i64,
    pub active_courses: i64,
    pub graduates: i64,
    pub course_counts: BTreeMap<String, i64>,
    pub enrollments_by_course: BTreeMap<String, i64>,
    pub success_rate: i64,
}

impl From<StatsCounts> for StatsSnapshot {
    fn from(counts: StatsCounts) -> Self {
        let success_rate = success_rate(counts.graduates, counts.total_students);
        Self {
            total_students: counts.total_students,
            total_courses: counts.total_courses,
            active_students: counts.active_students,
            active_courses: counts.active_courses,
            graduates: counts.graduates,
            course_counts: counts.course_counts,
            enrollments_by_course: counts.enrollments_by_course,
            success_rate,
        }
    }
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

/// Percentage of students that graduated, rounded half-up to an integer.
///
/// Returns 0 when there are no students, whatever `graduates` says.
/// Negative inputs are treated as zero.
pub fn success_rate(graduates: i64, total_students: i64) -> i64 {
    if total_students <= 0 {
        return 0;
    }
    let graduates = graduates.max(0);
    // round(g * 100 / t) == floor((2 * g * 100 + t) / (2 * t)) for g, t >= 0.
    (graduates * 200 + total_students) / (total_students * 2)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
