use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioError, GetPortfolioUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::PortfolioRepository;
use crate::modules::portfolio::domain::{default_portfolio, PortfolioData, PORTFOLIO_ID};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct GetPortfolioService<R>
where
    R: PortfolioRepository,
{
    repository: R,
}

impl<R> GetPortfolioService<R>
where
    R: PortfolioRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetPortfolioUseCase for GetPortfolioService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(&self) -> Result<PortfolioData, GetPortfolioError> {
        match self.repository.find().await {
            Ok(Some(data)) => return Ok(data),
            Ok(None) => {}
            Err(e) => {
                error!("Failed to load portfolio {}: {}", PORTFOLIO_ID, e);
                return Err(GetPortfolioError::RepositoryError(e.to_string()));
            }
        }

        info!("Portfolio {} not found, seeding default content", PORTFOLIO_ID);

        if let Err(e) = self.repository.seed(&default_portfolio()).await {
            error!("Seeding portfolio {} failed: {}", PORTFOLIO_ID, e);
            return Err(GetPortfolioError::NotFound);
        }

        match self.repository.find().await {
            Ok(Some(data)) => Ok(data),
            Ok(None) => {
                warn!("Portfolio {} still missing after seeding", PORTFOLIO_ID);
                Err(GetPortfolioError::NotFound)
            }
            Err(e) => Err(GetPortfolioError::RepositoryError(e.to_string())),
        }
    }
}
