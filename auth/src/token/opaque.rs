use std::fmt;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::rand_core::RngCore;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use sha2::Digest;
use sha2::Sha256;

use super::errors::TokenError;

/// Number of random bytes behind every token.
pub const TOKEN_ENTROPY_BYTES: usize = 32;

/// Length of the transport encoding of a token (unpadded base64 of 32 bytes).
pub const TOKEN_PLAINTEXT_LEN: usize = 43;

/// SHA-256 digest of a token plaintext.
///
/// This is the only form of a token that should ever be persisted or compared.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenHash([u8; 32]);

impl TokenHash {
    /// Digest a token plaintext.
    pub fn from_plaintext(plaintext: &str) -> Self {
        Self(Sha256::digest(plaintext.as_bytes()).into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

// Digests are not secrets, but keep them short in logs.
impl fmt::Debug for TokenHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenHash(")?;
        for byte in &self.0[..4] {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, "..)")
    }
}

/// Freshly issued bearer token.
///
/// The plaintext exists only in this value and must be handed to the caller
/// exactly once; the hash is what gets stored.
#[derive(Clone)]
pub struct OpaqueToken {
    pub plaintext: String,
    pub hash: TokenHash,
    pub expiry: DateTime<Utc>,
}

impl OpaqueToken {
    /// Generate a new random token valid for `ttl` from now.
    ///
    /// # Arguments
    /// * `ttl` - Lifetime of the token
    ///
    /// # Returns
    /// Token with its plaintext, digest and absolute expiry
    ///
    /// # Errors
    /// * `RandomSourceFailed` - The OS random source could not be read
    pub fn generate(ttl: Duration) -> Result<Self, TokenError> {
        let mut bytes = [0u8; TOKEN_ENTROPY_BYTES];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| TokenError::RandomSourceFailed(e.to_string()))?;

        let plaintext = URL_SAFE_NO_PAD.encode(bytes);
        let hash = TokenHash::from_plaintext(&plaintext);

        Ok(Self {
            plaintext,
            hash,
            expiry: Utc::now() + ttl,
        })
    }
}

impl fmt::Debug for OpaqueToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpaqueToken")
            .field("plaintext", &"<redacted>")
            .field("hash", &self.hash)
            .field("expiry", &self.expiry)
            .finish()
    }
}
