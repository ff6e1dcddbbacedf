use thiserror::Error;

/// Error type for opaque token operations.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Secure random source unavailable: {0}")]
    RandomSourceFailed(String),
}
