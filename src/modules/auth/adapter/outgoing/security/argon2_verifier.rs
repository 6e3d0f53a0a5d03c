use argon2::{
    password_hash::{Error as PasswordHashError, PasswordHash, PasswordVerifier as _},
    Argon2,
};
use async_trait::async_trait;

use crate::auth::application::ports::outgoing::password_verifier::{HashError, PasswordVerifier};

/// Verifies passwords against Argon2 PHC strings. Parameters come from the
/// stored hash, so any cost setting used at hashing time is honoured.
#[derive(Clone, Default)]
pub struct Argon2Verifier;

impl Argon2Verifier {
    pub fn new() -> Self {
        Self
    }

    /// Parses a PHC string without verifying anything, for startup checks.
    pub fn check_hash(hash: &str) -> Result<(), HashError> {
        PasswordHash::new(hash)
            .map(|_| ())
            .map_err(|e| HashError::InvalidHash(e.to_string()))
    }
}

#[async_trait]
impl PasswordVerifier for Argon2Verifier {
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || {
            let parsed_hash =
                PasswordHash::new(&hash).map_err(|e| HashError::InvalidHash(e.to_string()))?;

            match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
                Ok(_) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(e) => Err(HashError::VerificationFailed(e.to_string())),
            }
        })
        .await
        .map_err(|e| HashError::VerificationFailed(e.to_string()))?
    }
}
