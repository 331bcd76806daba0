use crate::types::DbId;

/// Message returned when the referential guard blocks a course deletion.
pub const COURSE_IN_USE: &str = "cannot delete: referenced by existing students";

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// The conflict raised when a course still has students referencing it.
    pub fn course_in_use() -> Self {
        CoreError::Conflict(COURSE_IN_USE.to_string())
    }
}
