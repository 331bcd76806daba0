//! Row types and request DTOs.
//!
//! DTOs derive [`validator::Validate`]; handlers call `validate()` before
//! touching the database.

pub mod course;
pub mod status;
pub mod student;

use validator::ValidationError;

/// Reject strings that are empty or only whitespace.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}
