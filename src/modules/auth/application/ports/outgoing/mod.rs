pub mod password_verifier;
pub mod token_provider;

pub use password_verifier::{HashError, PasswordVerifier};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
