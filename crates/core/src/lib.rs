//! Domain types and pure logic for the enrollment backend.
//!
//! Nothing in this crate touches the database; repositories in `enroll_db`
//! fetch the numbers and hand them to the functions defined here.

pub mod error;
pub mod pagination;
pub mod stats;
pub mod types;
pub mod uptime;
