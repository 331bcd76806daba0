//! Request handlers.
//!
//! Handlers delegate to the repositories in `enroll_db` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod course;
pub mod dashboard;
pub mod student;
