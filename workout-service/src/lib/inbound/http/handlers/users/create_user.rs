use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ParseUserRequestError;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::JsonBody;
use crate::inbound::http::messages::UserMessage;
use crate::inbound::http::router::AppState;

/// Registration body. Missing fields deserialize as empty and are rejected
/// by validation rather than by the JSON parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub bio: String,
}

impl CreateUserRequest {
    fn try_into_command(self) -> Result<CreateUserCommand, ParseUserRequestError> {
        let username = Username::new(self.username)?;
        let email = EmailAddress::new(self.email)?;
        if self.password.is_empty() {
            return Err(ParseUserRequestError::MissingPassword);
        }

        Ok(CreateUserCommand::new(
            username,
            email,
            self.password,
            self.bio,
        ))
    }
}

pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateUserRequest>,
) -> Result<ApiSuccess<UserMessage>, ApiError> {
    let command = body.try_into_command()?;

    state
        .user_service
        .register_user(command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, "user", user.into()))
}
