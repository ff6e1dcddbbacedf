use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use crate::domain::token::ports::TokenServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::JsonBody;
use crate::inbound::http::messages::AuthTokenMessage;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CreateTokenRequest {
    pub username: String,
    pub password: String,
}

/// Exchange username and password for an authentication token.
pub async fn create_token(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateTokenRequest>,
) -> Result<ApiSuccess<AuthTokenMessage>, ApiError> {
    state
        .token_service
        .create_token(&body.username, &body.password)
        .await
        .map_err(ApiError::from)
        .map(|ref token| ApiSuccess::new(StatusCode::CREATED, "auth_token", token.into()))
}
