use std::fmt;

use auth::OpaqueToken;
use auth::TokenHash;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::user::models::UserId;

/// Purpose a token was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenScope {
    Authentication,
}

impl TokenScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenScope::Authentication => "authentication",
        }
    }
}

impl fmt::Display for TokenScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token issued to a user.
///
/// Carries the plaintext only between issuance and the response that hands it
/// out; repositories persist `hash`, `user_id`, `expiry` and `scope`.
#[derive(Debug, Clone)]
pub struct Token {
    pub plaintext: String,
    pub hash: TokenHash,
    pub user_id: UserId,
    pub expiry: DateTime<Utc>,
    pub scope: TokenScope,
}

impl Token {
    pub fn new(issued: OpaqueToken, user_id: UserId, scope: TokenScope) -> Self {
        Self {
            plaintext: issued.plaintext,
            hash: issued.hash,
            user_id,
            expiry: issued.expiry,
            scope,
        }
    }
}

/// Persisted token record, as found by digest and scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredToken {
    pub user_id: UserId,
    pub expiry: DateTime<Utc>,
}

impl StoredToken {
    /// A token is valid strictly before its expiry instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiry <= now
    }
}
