use crate::domain::workout::errors::WorkoutError;
use crate::domain::workout::models::WorkoutId;
use crate::inbound::http::handlers::ApiError;

pub mod create_workout;
pub mod delete_workout;
pub mod get_workout;
pub mod update_workout;

pub use create_workout::create_workout;
pub use delete_workout::delete_workout;
pub use get_workout::get_workout;
pub use update_workout::update_workout;

fn parse_workout_id(raw: &str) -> Result<WorkoutId, ApiError> {
    WorkoutId::from_string(raw)
        .map_err(WorkoutError::from)
        .map_err(ApiError::from)
}
