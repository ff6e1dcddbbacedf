use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use super::ParseUserRequestError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::JsonBody;
use crate::inbound::http::messages::UserMessage;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Profile update body; absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub bio: Option<String>,
}

impl UpdateUserRequest {
    fn try_into_command(self) -> Result<UpdateUserCommand, ParseUserRequestError> {
        let username = self.username.map(Username::new).transpose()?;
        let email = self.email.map(EmailAddress::new).transpose()?;
        if matches!(self.password.as_deref(), Some("")) {
            return Err(ParseUserRequestError::MissingPassword);
        }

        Ok(UpdateUserCommand {
            username,
            email,
            password: self.password,
            bio: self.bio,
        })
    }
}

pub async fn update_current_user(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    JsonBody(body): JsonBody<UpdateUserRequest>,
) -> Result<ApiSuccess<UserMessage>, ApiError> {
    let command = body.try_into_command()?;

    state
        .user_service
        .update_user(user.id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, "user", user.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::errors::UsernameError;

    #[test]
    fn test_empty_body_changes_nothing() {
        let command = UpdateUserRequest::default().try_into_command().unwrap();
        assert!(command.username.is_none());
        assert!(command.email.is_none());
        assert!(command.password.is_none());
        assert!(command.bio.is_none());
    }

    #[test]
    fn test_present_fields_are_validated() {
        let err = UpdateUserRequest {
            username: Some("x".repeat(51)),
            ..Default::default()
        }
        .try_into_command()
        .unwrap_err();
        assert_eq!(
            err,
            ParseUserRequestError::Username(UsernameError::TooLong {
                max: 50,
                actual: 51
            })
        );

        let err = UpdateUserRequest {
            password: Some(String::new()),
            ..Default::default()
        }
        .try_into_command()
        .unwrap_err();
        assert_eq!(err, ParseUserRequestError::MissingPassword);
    }
}
