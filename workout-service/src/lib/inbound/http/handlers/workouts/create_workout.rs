use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use crate::domain::workout::models::CreateWorkoutCommand;
use crate::domain::workout::ports::WorkoutServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::JsonBody;
use crate::inbound::http::messages::WorkoutEntryBody;
use crate::inbound::http::messages::WorkoutMessage;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateWorkoutRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Minutes.
    #[serde(default)]
    pub duration: i32,
    #[serde(default)]
    pub calories_burned: i32,
    #[serde(default)]
    pub entries: Vec<WorkoutEntryBody>,
}

impl From<CreateWorkoutRequest> for CreateWorkoutCommand {
    fn from(req: CreateWorkoutRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            duration_minutes: req.duration,
            calories_burned: req.calories_burned,
            entries: req.entries.into_iter().map(Into::into).collect(),
        }
    }
}

/// Record a workout owned by the caller. Header and entries are stored together or not at all.
pub async fn create_workout(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    JsonBody(body): JsonBody<CreateWorkoutRequest>,
) -> Result<ApiSuccess<WorkoutMessage>, ApiError> {
    state
        .workout_service
        .create_workout(user.id, body.into())
        .await
        .map_err(ApiError::from)
        .map(|ref workout| ApiSuccess::new(StatusCode::CREATED, "workout", workout.into()))
}
