use chrono::Duration;

use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::OpaqueToken;
use crate::token::TokenError;
use crate::token::TokenHash;

/// Authentication coordinator combining password verification and token issuance.
///
/// Provides high-level authentication operations by coordinating
/// password hashing and opaque token generation.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_ttl: Duration,
    placeholder_hash: Option<String>,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `token_ttl` - Lifetime of every token issued by this authenticator
    pub fn new(token_ttl: Duration) -> Self {
        let password_hasher = PasswordHasher::new();
        let placeholder_hash = password_hasher.hash("placeholder-credential").ok();

        Self {
            password_hasher,
            token_ttl,
            placeholder_hash,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    ///
    /// # Returns
    /// Freshly generated token; its plaintext must be returned to the caller once
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Password verification could not run
    /// * `TokenError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
    ) -> Result<OpaqueToken, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash)? {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(OpaqueToken::generate(self.token_ttl)?)
    }

    /// Reject a login for a user that does not exist.
    ///
    /// Verifies `password` against a placeholder hash first so a lookup miss
    /// costs the same as a wrong password.
    pub fn reject_unknown_user(&self, password: &str) -> AuthenticationError {
        if let Some(hash) = &self.placeholder_hash {
            let _ = self.password_hasher.verify(password, hash);
        }

        AuthenticationError::InvalidCredentials
    }

    /// Digest a presented token plaintext for lookup.
    pub fn digest(&self, plaintext: &str) -> TokenHash {
        TokenHash::from_plaintext(plaintext)
    }
}

impl Default for Authenticator {
    fn default() -> Self {
        Self::new(Duration::hours(24))
    }
}
