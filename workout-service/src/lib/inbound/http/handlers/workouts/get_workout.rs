use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::parse_workout_id;
use crate::domain::workout::ports::WorkoutServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::messages::WorkoutMessage;
use crate::inbound::http::router::AppState;

pub async fn get_workout(
    State(state): State<AppState>,
    Path(workout_id): Path<String>,
) -> Result<ApiSuccess<WorkoutMessage>, ApiError> {
    let workout_id = parse_workout_id(&workout_id)?;

    state
        .workout_service
        .get_workout(workout_id)
        .await
        .map_err(ApiError::from)
        .map(|ref workout| ApiSuccess::new(StatusCode::OK, "workout", workout.into()))
}
