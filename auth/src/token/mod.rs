pub mod errors;
pub mod opaque;

pub use errors::TokenError;
pub use opaque::OpaqueToken;
pub use opaque::TokenHash;
