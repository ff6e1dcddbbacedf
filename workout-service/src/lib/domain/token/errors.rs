use thiserror::Error;

use crate::domain::user::errors::UserError;

/// Errors raised while issuing or resolving bearer tokens.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("token not found")]
    NotFound,

    #[error("token expired")]
    Expired,

    #[error("token owner no longer exists: {0}")]
    OwnerNotFound(String),

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Token generation failed: {0}")]
    Generation(#[from] auth::TokenError),

    #[error("User lookup failed: {0}")]
    User(#[from] UserError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<auth::AuthenticationError> for TokenError {
    fn from(err: auth::AuthenticationError) -> Self {
        match err {
            auth::AuthenticationError::InvalidCredentials => TokenError::InvalidCredentials,
            auth::AuthenticationError::PasswordError(e) => TokenError::Password(e),
            auth::AuthenticationError::TokenError(e) => TokenError::Generation(e),
        }
    }
}
