//! Integration tests for the course deletion guard.

use chrono::NaiveDate;
use enroll_db::models::course::CreateCourse;
use enroll_db::models::student::CreateStudent;
use enroll_db::repositories::{CourseRepo, StudentRepo};
use sqlx::PgPool;

fn new_course(name: &str) -> CreateCourse {
    CreateCourse {
        name: name.to_string(),
        description: "guard test".to_string(),
        duration: 6,
        status: None,
    }
}

fn new_student(email: &str, course: &str) -> CreateStudent {
    CreateStudent {
        name: "Guarded".to_string(),
        email: email.to_string(),
        course: course.to_string(),
        enrollment_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        status: None,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unreferenced_course_can_be_deleted(pool: PgPool) {
    let course = CourseRepo::create(&pool, &new_course("CS102")).await.unwrap();

    assert!(CourseRepo::can_delete(&pool, course.id).await.unwrap());
    assert!(CourseRepo::delete(&pool, course.id).await.unwrap());
    assert!(CourseRepo::find_by_id(&pool, course.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_course_referenced_by_name_is_guarded(pool: PgPool) {
    let course = CourseRepo::create(&pool, &new_course("CS101")).await.unwrap();
    StudentRepo::create(&pool, &new_student("a@example.com", "CS101"))
        .await
        .unwrap();

    assert!(!CourseRepo::can_delete(&pool, course.id).await.unwrap());
    assert_eq!(
        CourseRepo::count_referencing_students(&pool, course.id)
            .await
            .unwrap(),
        1
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_course_referenced_by_id_is_guarded(pool: PgPool) {
    let course = CourseRepo::create(&pool, &new_course("CS101")).await.unwrap();
    StudentRepo::create(&pool, &new_student("a@example.com", &course.id.to_string()))
        .await
        .unwrap();
    StudentRepo::create(&pool, &new_student("b@example.com", "CS101"))
        .await
        .unwrap();

    assert_eq!(
        CourseRepo::count_referencing_students(&pool, course.id)
            .await
            .unwrap(),
        2
    );
    assert!(!CourseRepo::can_delete(&pool, course.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_guard_clears_once_students_leave(pool: PgPool) {
    let course = CourseRepo::create(&pool, &new_course("CS103")).await.unwrap();
    let student = StudentRepo::create(&pool, &new_student("c@example.com", "CS103"))
        .await
        .unwrap();

    assert!(!CourseRepo::can_delete(&pool, course.id).await.unwrap());
    StudentRepo::delete(&pool, student.id).await.unwrap();
    assert!(CourseRepo::can_delete(&pool, course.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_other_courses_do_not_block(pool: PgPool) {
    let course = CourseRepo::create(&pool, &new_course("CS104")).await.unwrap();
    CourseRepo::create(&pool, &new_course("CS105")).await.unwrap();
    StudentRepo::create(&pool, &new_student("d@example.com", "CS105"))
        .await
        .unwrap();

    assert!(CourseRepo::can_delete(&pool, course.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_course_is_deletable(pool: PgPool) {
    assert!(CourseRepo::can_delete(&pool, 424_242).await.unwrap());
}
