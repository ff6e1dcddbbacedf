use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use super::parse_workout_id;
use crate::domain::workout::models::UpdateWorkoutCommand;
use crate::domain::workout::ports::WorkoutServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::JsonBody;
use crate::inbound::http::messages::WorkoutEntryBody;
use crate::inbound::http::messages::WorkoutMessage;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Partial update. An `entries` array, even an empty one, replaces every
/// stored entry; omitting it keeps them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UpdateWorkoutRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<i32>,
    pub calories_burned: Option<i32>,
    pub entries: Option<Vec<WorkoutEntryBody>>,
}

impl From<UpdateWorkoutRequest> for UpdateWorkoutCommand {
    fn from(req: UpdateWorkoutRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            duration_minutes: req.duration,
            calories_burned: req.calories_burned,
            entries: req
                .entries
                .map(|entries| entries.into_iter().map(Into::into).collect()),
        }
    }
}

pub async fn update_workout(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    Path(workout_id): Path<String>,
    JsonBody(body): JsonBody<UpdateWorkoutRequest>,
) -> Result<ApiSuccess<WorkoutMessage>, ApiError> {
    let workout_id = parse_workout_id(&workout_id)?;

    state
        .workout_service
        .update_workout(workout_id, user.id, body.into())
        .await
        .map_err(ApiError::from)
        .map(|ref workout| ApiSuccess::new(StatusCode::OK, "workout", workout.into()))
}
