use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    /// The stored hash is not a valid PHC string.
    InvalidHash(String),
    VerificationFailed(String),
}

impl fmt::Display for HashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashError::InvalidHash(msg) => write!(f, "Invalid password hash: {}", msg),
            HashError::VerificationFailed(msg) => {
                write!(f, "Password verification failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for HashError {}

#[async_trait]
pub trait PasswordVerifier: Send + Sync {
    /// `Ok(false)` for a wrong password, `Err` only when verification itself
    /// could not run.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
