use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::portfolio::domain::PortfolioData;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PortfolioRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Non-database backends (file system, undecodable stored document).
    #[error("Storage error: {0}")]
    StorageError(String),
}

/// Storage for the singleton portfolio document.
///
/// Every backend must make `replace` all-or-nothing: a reader either sees the
/// previous document or the new one, never a mix of both.
#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    /// Loads the document, `None` when nothing was ever written.
    async fn find(&self) -> Result<Option<PortfolioData>, PortfolioRepositoryError>;

    /// Writes `data` only if no document exists yet.
    async fn seed(&self, data: &PortfolioData) -> Result<(), PortfolioRepositoryError>;

    /// Overwrites the document and all of its lists.
    async fn replace(&self, data: &PortfolioData) -> Result<(), PortfolioRepositoryError>;
}

#[async_trait]
impl<T> PortfolioRepository for Arc<T>
where
    T: PortfolioRepository + ?Sized,
{
    async fn find(&self) -> Result<Option<PortfolioData>, PortfolioRepositoryError> {
        (**self).find().await
    }

    async fn seed(&self, data: &PortfolioData) -> Result<(), PortfolioRepositoryError> {
        (**self).seed(data).await
    }

    async fn replace(&self, data: &PortfolioData) -> Result<(), PortfolioRepositoryError> {
        (**self).replace(data).await
    }
}
