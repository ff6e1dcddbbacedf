use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::ser::SerializeMap;
use serde::Serialize;
use serde::Serializer;

use crate::domain::token::errors::TokenError;
use crate::domain::user::errors::UserError;
use crate::domain::workout::errors::WorkoutError;

pub mod health;
pub mod tokens;
pub mod users;
pub mod workouts;

pub use health::health_check;
pub use tokens::create_token;
pub use users::create_user;
pub use users::get_current_user;
pub use users::update_current_user;
pub use workouts::create_workout;
pub use workouts::delete_workout;
pub use workouts::get_workout;
pub use workouts::update_workout;

/// Top-level JSON wrapper: every body is a single-key object such as
/// `{"workout": {...}}` or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope<T: Serialize + PartialEq> {
    key: &'static str,
    value: T,
}

impl<T: Serialize + PartialEq> Envelope<T> {
    pub fn new(key: &'static str, value: T) -> Self {
        Self { key, value }
    }
}

impl<T: Serialize + PartialEq> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, &self.value)?;
        map.end()
    }
}

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<Envelope<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, key: &'static str, data: T) -> Self {
        ApiSuccess(status, Json(Envelope::new(key, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// HTTP-facing error.
///
/// `InternalServerError` carries detail for the log only; clients always see
/// a generic message for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Request failed with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        };

        (status, Json(Envelope::new("error", message))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidUsername(e) => ApiError::BadRequest(e.to_string()),
            UserError::InvalidEmail(e) => ApiError::BadRequest(e.to_string()),
            UserError::NotFound(_) => ApiError::NotFound("user not found".to_string()),
            UserError::UsernameAlreadyExists(_) | UserError::EmailAlreadyExists(_) => {
                ApiError::Conflict(err.to_string())
            }
            UserError::Password(_) | UserError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::InvalidCredentials => {
                ApiError::Unauthorized("invalid credentials".to_string())
            }
            TokenError::NotFound | TokenError::Expired | TokenError::OwnerNotFound(_) => {
                ApiError::Unauthorized("invalid authorization".to_string())
            }
            TokenError::Password(_)
            | TokenError::Generation(_)
            | TokenError::User(_)
            | TokenError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<WorkoutError> for ApiError {
    fn from(err: WorkoutError) -> Self {
        match err {
            WorkoutError::InvalidWorkoutId(_) => {
                ApiError::BadRequest("invalid workout id".to_string())
            }
            WorkoutError::NotFound(_) => ApiError::NotFound("workout not found".to_string()),
            WorkoutError::Forbidden(_) => ApiError::Forbidden(err.to_string()),
            WorkoutError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

/// `Json` extractor whose rejection is an enveloped 400.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected request body");
        ApiError::BadRequest("invalid request payload".to_string())
    }
}
