use thiserror::Error;

/// Error for WorkoutId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkoutIdError {
    #[error("invalid workout id: {0}")]
    InvalidFormat(String),

    #[error("invalid workout id: must be positive, got {0}")]
    NotPositive(i64),
}

/// Top-level error for workout operations
#[derive(Debug, Clone, Error)]
pub enum WorkoutError {
    #[error(transparent)]
    InvalidWorkoutId(#[from] WorkoutIdError),

    #[error("workout not found: {0}")]
    NotFound(String),

    #[error("you are not authorized to modify workout {0}")]
    Forbidden(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
