pub mod create_token;

pub use create_token::create_token;
