use async_trait::async_trait;

use crate::modules::portfolio::domain::PortfolioData;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPortfolioError {
    /// No record exists and seeding the default one failed.
    #[error("Portfolio not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetPortfolioUseCase: Send + Sync {
    /// Returns the singleton portfolio, seeding the default document when the
    /// store is empty.
    async fn execute(&self) -> Result<PortfolioData, GetPortfolioError>;
}
