//! Authentication utilities library
//!
//! Provides reusable credential infrastructure:
//! - Password hashing (Argon2id)
//! - Opaque bearer token generation and SHA-256 digesting
//! - Authentication coordination
//!
//! The service owns users, scopes and persistence and adapts these primitives.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Opaque Tokens
//! ```
//! use auth::{OpaqueToken, TokenHash};
//!
//! let token = OpaqueToken::generate(chrono::Duration::hours(24)).unwrap();
//! // Only `token.hash` is ever stored; lookups digest the presented plaintext.
//! assert_eq!(TokenHash::from_plaintext(&token.plaintext), token.hash);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(chrono::Duration::hours(24));
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let token = auth.authenticate("password123", &hash).unwrap();
//!
//! // Later requests present the plaintext; compare digests
//! assert_eq!(auth.digest(&token.plaintext), token.hash);
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::OpaqueToken;
pub use token::TokenError;
pub use token::TokenHash;
