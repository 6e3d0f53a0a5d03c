use async_trait::async_trait;

use crate::modules::portfolio::application::ports::outgoing::PortfolioRepositoryError;
use crate::modules::portfolio::domain::{PayloadError, PortfolioData, PortfolioPayload};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReplacePortfolioError {
    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PayloadError> for ReplacePortfolioError {
    fn from(err: PayloadError) -> Self {
        ReplacePortfolioError::InvalidFormat(err.to_string())
    }
}

impl From<PortfolioRepositoryError> for ReplacePortfolioError {
    fn from(err: PortfolioRepositoryError) -> Self {
        match err {
            PortfolioRepositoryError::DatabaseError(msg)
            | PortfolioRepositoryError::StorageError(msg) => {
                ReplacePortfolioError::RepositoryError(msg)
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ReplacePortfolioUseCase: Send + Sync {
    /// Validates the payload and overwrites the whole stored document with it.
    async fn execute(&self, payload: PortfolioPayload)
        -> Result<PortfolioData, ReplacePortfolioError>;
}
