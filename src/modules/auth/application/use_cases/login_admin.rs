use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{PasswordVerifier, TokenProvider};

// ========================= Login Request =========================
/// Admin password as submitted; never logged.
#[derive(Clone)]
pub struct LoginRequest {
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginRequestError {
    EmptyPassword,
}

impl std::fmt::Display for LoginRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginRequestError::EmptyPassword => write!(f, "Password cannot be empty"),
        }
    }
}

impl std::error::Error for LoginRequestError {}

impl LoginRequest {
    pub fn new(password: String) -> Result<Self, LoginRequestError> {
        if password.is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }
        Ok(Self { password })
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone)]
pub enum LoginError {
    InvalidCredentials,
    PasswordVerificationFailed(String),
    TokenGenerationFailed(String),
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::InvalidCredentials => write!(f, "Invalid password"),
            LoginError::PasswordVerificationFailed(msg) => {
                write!(f, "Password verification failed: {}", msg)
            }
            LoginError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for LoginError {}

// ============================ Login Response =================================
#[derive(Debug, Clone)]
pub struct LoginAdminResponse {
    pub session_token: String,
    pub expires_in: i64,
}

// ============================ Use Case =================================
#[async_trait]
pub trait ILoginAdminUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginAdminResponse, LoginError>;
}

pub struct LoginAdminUseCase {
    password_hash: String,
    verifier: Arc<dyn PasswordVerifier>,
    tokens: Arc<dyn TokenProvider>,
}

impl LoginAdminUseCase {
    pub fn new(
        password_hash: String,
        verifier: Arc<dyn PasswordVerifier>,
        tokens: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            password_hash,
            verifier,
            tokens,
        }
    }
}

#[async_trait]
impl ILoginAdminUseCase for LoginAdminUseCase {
    async fn execute(&self, request: LoginRequest) -> Result<LoginAdminResponse, LoginError> {
        let matches = self
            .verifier
            .verify_password(request.password(), &self.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !matches {
            return Err(LoginError::InvalidCredentials);
        }

        let session_token = self
            .tokens
            .generate_session_token()
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginAdminResponse {
            session_token,
            expires_in: self.tokens.session_expiry_seconds(),
        })
    }
}
