use thiserror::Error;

use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::UsernameError;
use crate::inbound::http::handlers::ApiError;

pub mod create_user;
pub mod get_current_user;
pub mod update_current_user;

pub use create_user::create_user;
pub use get_current_user::get_current_user;
pub use update_current_user::update_current_user;

/// Field-level failure while turning a user request body into a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseUserRequestError {
    #[error(transparent)]
    Username(#[from] UsernameError),

    #[error(transparent)]
    Email(#[from] EmailError),

    #[error("password is required")]
    MissingPassword,
}

impl From<ParseUserRequestError> for ApiError {
    fn from(e: ParseUserRequestError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
