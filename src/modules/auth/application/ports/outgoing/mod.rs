pub mod password_hasher;
pub mod token_provider;

pub use password_hasher::{HashError, PasswordHasher};
pub use token_provider::{AccessClaims, TokenError, TokenProvider};
