use thiserror::Error;

/// User-facing message for a slot whose end does not come after its start.
pub const ERR_END_BEFORE_START: &str = "End time must be after start time.";

/// User-facing message for a slot that intersects an existing one.
pub const ERR_SLOT_OVERLAP: &str = "This time slot overlaps with an existing slot";

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
