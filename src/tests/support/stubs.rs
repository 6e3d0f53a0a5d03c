use async_trait::async_trait;

use crate::auth::application::use_cases::login_admin::{
    ILoginAdminUseCase, LoginAdminResponse, LoginError, LoginRequest,
};
use crate::modules::contact::application::ports::incoming::use_cases::{
    SubmitContactError, SubmitContactUseCase,
};
use crate::modules::contact::domain::ContactMessage;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioError, GetPortfolioUseCase, ReplacePortfolioError, ReplacePortfolioUseCase,
};
use crate::modules::portfolio::domain::{default_portfolio, PortfolioData, PortfolioPayload};
use crate::modules::summary::application::ports::incoming::use_cases::{
    GenerateSummaryError, GenerateSummaryUseCase,
};
use crate::modules::summary::domain::SummaryInput;

// ==============================
// Portfolio
// ==============================

#[derive(Clone)]
pub struct StubGetPortfolioUseCase;

#[async_trait]
impl GetPortfolioUseCase for StubGetPortfolioUseCase {
    async fn execute(&self) -> Result<PortfolioData, GetPortfolioError> {
        Ok(default_portfolio())
    }
}

#[derive(Clone)]
pub struct StubReplacePortfolioUseCase;

#[async_trait]
impl ReplacePortfolioUseCase for StubReplacePortfolioUseCase {
    async fn execute(
        &self,
        payload: PortfolioPayload,
    ) -> Result<PortfolioData, ReplacePortfolioError> {
        Ok(payload.validate()?)
    }
}

// ==============================
// Auth
// ==============================

#[derive(Clone)]
pub struct StubLoginAdminUseCase;

#[async_trait]
impl ILoginAdminUseCase for StubLoginAdminUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginAdminResponse, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

// ==============================
// Summary
// ==============================

#[derive(Clone)]
pub struct StubGenerateSummaryUseCase;

#[async_trait]
impl GenerateSummaryUseCase for StubGenerateSummaryUseCase {
    async fn execute(&self, _input: SummaryInput) -> Result<String, GenerateSummaryError> {
        Err(GenerateSummaryError::Unavailable)
    }
}

// ==============================
// Contact
// ==============================

#[derive(Clone)]
pub struct StubSubmitContactUseCase;

#[async_trait]
impl SubmitContactUseCase for StubSubmitContactUseCase {
    async fn execute(&self, _message: ContactMessage) -> Result<(), SubmitContactError> {
        Ok(())
    }
}
