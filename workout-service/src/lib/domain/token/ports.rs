use async_trait::async_trait;
use auth::TokenHash;

use crate::domain::token::errors::TokenError;
use crate::domain::token::models::StoredToken;
use crate::domain::token::models::Token;
use crate::domain::token::models::TokenScope;
use crate::domain::user::models::User;

/// Port for token issuance and resolution.
#[async_trait]
pub trait TokenServicePort: Send + Sync + 'static {
    /// Exchange username and password for a new authentication token.
    ///
    /// # Returns
    /// Issued token, including the plaintext to hand to the caller once
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    /// * `Password` - Password verification could not run
    /// * `Generation` - Token generation failed
    /// * `DatabaseError` - Token could not be stored
    async fn create_token(&self, username: &str, password: &str) -> Result<Token, TokenError>;

    /// Resolve a presented bearer token to its owner.
    ///
    /// # Errors
    /// * `NotFound` - No token with this digest and scope
    /// * `Expired` - Token exists but its expiry has passed
    /// * `OwnerNotFound` - Token references a user that is gone
    /// * `DatabaseError` / `User` - Storage failure
    async fn authenticate_token(&self, plaintext: &str) -> Result<User, TokenError>;
}

/// Persistence operations for token digests.
#[async_trait]
pub trait TokenRepository: Send + Sync + 'static {
    /// Persist the digest, owner, expiry and scope of a token.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn insert(&self, token: &Token) -> Result<(), TokenError>;

    /// Find a token record by digest within a scope, regardless of expiry.
    ///
    /// # Returns
    /// Optional token record (None if no digest matches)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_hash(
        &self,
        scope: TokenScope,
        hash: &TokenHash,
    ) -> Result<Option<StoredToken>, TokenError>;
}
