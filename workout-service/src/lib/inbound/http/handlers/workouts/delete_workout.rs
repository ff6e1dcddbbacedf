use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::parse_workout_id;
use crate::domain::workout::ports::WorkoutServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_workout(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    Path(workout_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let workout_id = parse_workout_id(&workout_id)?;

    state
        .workout_service
        .delete_workout(workout_id, user.id)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
